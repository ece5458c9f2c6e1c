mod cart;
mod order_amount;

pub use cart::parse_cart;
pub use order_amount::calculate_order_amount;
