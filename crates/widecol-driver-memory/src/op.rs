mod delete;
mod get;
mod scan;
mod write;
