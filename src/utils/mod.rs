pub mod secret_str;
