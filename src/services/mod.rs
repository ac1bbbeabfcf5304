pub mod authc;
