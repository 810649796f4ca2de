pub mod answer;
pub mod classification;
pub mod outcome;
pub mod population;
pub mod record;
pub mod responses;
