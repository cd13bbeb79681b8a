pub mod dispatcher;

#[cfg(test)]
mod dispatcher_test;
