mod cmdline;
mod error_handling;
mod path_data;
mod render;
mod utils;
