/// A competing offer, used purely as a reference point when presenting results.
///
/// Competitor prices never feed the demand or profit computations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompetitorPrice {
    /// The competitor's brand
    pub brand: String,
    /// A free-form description of the competing product
    #[cfg_attr(feature = "serde", serde(default))]
    pub specification: String,
    /// The competitor's (positive) price
    pub price: f64,
}

/// A bounded, ordered collection of competitor prices
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<CompetitorPrice>", into = "Vec<CompetitorPrice>")
)]
pub struct Competitors(Vec<CompetitorPrice>);

impl Competitors {
    /// The largest number of competitors that may be supplied
    pub const MAX: usize = 5;

    /// Creates a new collection, checking its length and prices
    pub fn new(competitors: Vec<CompetitorPrice>) -> Result<Self, CompetitorError> {
        Self::try_from(competitors)
    }

    /// Iterate over the competitors in the order they were supplied
    pub fn iter(&self) -> std::slice::Iter<'_, CompetitorPrice> {
        self.0.iter()
    }

    /// The number of competitors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no competitors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<CompetitorPrice>> for Competitors {
    type Error = CompetitorError;

    fn try_from(value: Vec<CompetitorPrice>) -> Result<Self, Self::Error> {
        if value.len() > Self::MAX {
            return Err(CompetitorError::TooMany(value.len()));
        }
        if let Some(bad) = value
            .iter()
            .find(|competitor| !(competitor.price > 0.0 && competitor.price.is_finite()))
        {
            return Err(CompetitorError::NonPositivePrice(bad.brand.clone()));
        }
        Ok(Self(value))
    }
}

impl From<Competitors> for Vec<CompetitorPrice> {
    fn from(value: Competitors) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a Competitors {
    type Item = &'a CompetitorPrice;
    type IntoIter = std::slice::Iter<'a, CompetitorPrice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Errors that can occur when collecting competitor prices
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CompetitorError {
    /// Error when more than [`Competitors::MAX`] competitors are given
    #[error("At most {max} competitors are supported, got {0}", max = Competitors::MAX)]
    TooMany(usize),
    /// Error when a competitor's price is not a positive, finite number
    #[error("Competitor {0} must have a positive, finite price")]
    NonPositivePrice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(brand: &str, price: f64) -> CompetitorPrice {
        CompetitorPrice {
            brand: brand.to_owned(),
            specification: String::new(),
            price,
        }
    }

    #[test]
    fn test_empty() {
        assert!(Competitors::new(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let competitors =
            Competitors::new(vec![competitor("b", 30.0), competitor("a", 20.0)]).unwrap();
        let brands = competitors
            .iter()
            .map(|c| c.brand.as_str())
            .collect::<Vec<_>>();
        assert_eq!(brands, vec!["b", "a"]);
    }

    #[test]
    fn test_too_many() {
        let six = (0..6).map(|i| competitor("x", 10.0 + i as f64)).collect();
        assert_eq!(
            Competitors::new(six).unwrap_err(),
            CompetitorError::TooMany(6)
        );
    }

    #[test]
    fn test_bad_price() {
        assert_eq!(
            Competitors::new(vec![competitor("free", 0.0)]).unwrap_err(),
            CompetitorError::NonPositivePrice("free".to_owned())
        );
    }
}
