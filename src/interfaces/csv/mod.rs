pub mod coupon_reader;
