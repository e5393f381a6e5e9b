mod builder;
mod format;
