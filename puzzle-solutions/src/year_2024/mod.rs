pub mod day_3;
