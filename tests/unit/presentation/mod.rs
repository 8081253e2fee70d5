mod test_order;
mod test_price;
mod test_trade;
