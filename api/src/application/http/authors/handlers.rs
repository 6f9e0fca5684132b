pub mod get_author;
