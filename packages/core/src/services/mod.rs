pub mod slack;

#[cfg(test)]
pub mod mock_slack;
