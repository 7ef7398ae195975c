mod loan_instance;

pub use self::loan_instance::*;
