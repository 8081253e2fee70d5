mod test_registry;
mod test_requests;
mod test_responses;
mod test_stream;
