mod acceptance;

pub use acceptance::AcceptanceCurve;
