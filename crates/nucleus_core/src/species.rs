//! Nuclear species table.
//!
//! Maps standard symbols to mass numbers and Woods-Saxon parameters.
//! Woods-Saxon parameters follow the PHOBOS Glauber compilation
//! (arXiv:0805.4411).

use std::fmt;
use std::str::FromStr;

use crate::error::NucleusError;
use crate::woods_saxon::WoodsSaxonParams;

/// Supported nuclear species.
///
/// # Examples
///
/// ```
/// use nucleus_core::Species;
///
/// let lead: Species = "Pb".parse().unwrap();
/// assert_eq!(lead, Species::Lead);
/// assert_eq!(lead.mass_number(), 208);
/// assert_eq!(lead.to_string(), "Pb");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// Single proton, symbol `p`.
    Proton,
    /// Copper-63, symbol `Cu`.
    Copper,
    /// Gold-197, symbol `Au`.
    Gold,
    /// Lead-208, symbol `Pb`.
    Lead,
}

impl Species {
    /// Every supported species, in table order.
    pub const ALL: [Species; 4] = [
        Species::Proton,
        Species::Copper,
        Species::Gold,
        Species::Lead,
    ];

    /// Standard symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Species::Proton => "p",
            Species::Copper => "Cu",
            Species::Gold => "Au",
            Species::Lead => "Pb",
        }
    }

    /// Mass number A (number of nucleons).
    pub fn mass_number(&self) -> usize {
        match self {
            Species::Proton => 1,
            Species::Copper => 63,
            Species::Gold => 197,
            Species::Lead => 208,
        }
    }

    /// Woods-Saxon parameters `(R, a)` in fm, `None` for the proton.
    ///
    /// # Errors
    /// Propagates the validation error of [`WoodsSaxonParams::new`] for a
    /// table entry outside its domain.
    pub fn woods_saxon_params(&self) -> Result<Option<WoodsSaxonParams>, NucleusError> {
        let (radius, diffuseness) = match self {
            Species::Proton => return Ok(None),
            Species::Copper => (4.20641, 0.5977),
            Species::Gold => (6.38, 0.535),
            Species::Lead => (6.62, 0.546),
        };
        WoodsSaxonParams::new(radius, diffuseness).map(Some)
    }
}

impl FromStr for Species {
    type Err = NucleusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .iter()
            .copied()
            .find(|species| species.symbol() == s)
            .ok_or_else(|| NucleusError::UnknownSpecies {
                species: s.to_string(),
            })
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_symbols() {
        for species in Species::ALL {
            let parsed: Species = species.symbol().parse().unwrap();
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let result = "U".parse::<Species>();
        assert_eq!(
            result,
            Err(NucleusError::UnknownSpecies {
                species: "U".to_string()
            })
        );
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert!("pb".parse::<Species>().is_err());
        assert!("P".parse::<Species>().is_err());
    }

    #[test]
    fn test_mass_numbers() {
        assert_eq!(Species::Proton.mass_number(), 1);
        assert_eq!(Species::Copper.mass_number(), 63);
        assert_eq!(Species::Gold.mass_number(), 197);
        assert_eq!(Species::Lead.mass_number(), 208);
    }

    #[test]
    fn test_woods_saxon_params_present_for_heavy_nuclei() {
        assert_eq!(Species::Proton.woods_saxon_params(), Ok(None));
        let lead = Species::Lead.woods_saxon_params().unwrap().unwrap();
        assert_eq!(lead.radius(), 6.62);
        assert_eq!(lead.diffuseness(), 0.546);
        assert!(Species::Copper.woods_saxon_params().unwrap().is_some());
        assert!(Species::Gold.woods_saxon_params().unwrap().is_some());
    }

    #[test]
    fn test_every_table_entry_builds_params() {
        for species in Species::ALL {
            match species.woods_saxon_params() {
                Ok(None) => assert_eq!(species, Species::Proton),
                Ok(Some(params)) => {
                    assert!(params.radius() > 0.0);
                    assert!(params.diffuseness() > 0.0);
                }
                Err(err) => panic!("{} table entry rejected: {}", species, err),
            }
        }
    }
}
