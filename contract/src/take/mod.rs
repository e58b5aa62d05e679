mod api;

#[cfg(test)]
mod tests;
