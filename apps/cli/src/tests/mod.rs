mod error;
mod logger;
mod render;
