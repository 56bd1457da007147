mod aggregation;

pub use aggregation::group_sum;
