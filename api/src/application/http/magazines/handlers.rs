pub mod get_constituent;
pub mod get_constituents;
pub mod get_issue;
pub mod get_issues;
pub mod get_magazine;
