pub mod add;
pub mod check;
pub mod done;
pub mod next_date;
pub mod preview;
