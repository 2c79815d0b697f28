pub mod constants;
pub mod search;
pub mod slug;
pub mod submission;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
