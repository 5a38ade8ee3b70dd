pub mod app;
pub mod ui;

#[cfg(test)]
mod test_utils;
