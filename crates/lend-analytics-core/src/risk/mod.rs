pub mod assessor;
