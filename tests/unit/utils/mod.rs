mod test_config;
mod test_id;
mod test_template;
mod test_time;
