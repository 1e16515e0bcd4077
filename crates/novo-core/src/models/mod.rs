pub mod category;
pub mod question;
pub mod report;
pub mod response;
pub mod submission;
