//! The fixed set of fictitious provider records rendered into the fixture.

use std::fmt;

/// Practitioner specialty shown at the end of each directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Specialty {
    Cardiologist,
    Physician,
    Dentist,
    Surgeon,
}

impl Specialty {
    /// Returns the label printed in the document.
    pub fn label(self) -> &'static str {
        match self {
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Physician => "Physician",
            Specialty::Dentist => "Dentist",
            Specialty::Surgeon => "Surgeon",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single directory entry.
///
/// Values are stored without their printed labels; the `NPI:` and `Phone:`
/// prefixes are added by [`crate::directory`] when the entry is formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Provider {
    name: String,
    npi: String,
    phone: String,
    address: String,
    city: String,
    specialty: Specialty,
}

impl Provider {
    /// Creates a provider record.
    pub fn new(
        name: impl Into<String>,
        npi: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        specialty: Specialty,
    ) -> Self {
        Self {
            name: name.into(),
            npi: npi.into(),
            phone: phone.into(),
            address: address.into(),
            city: city.into(),
            specialty,
        }
    }

    /// Display name, including the honorific.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// National Provider Identifier digits.
    pub fn npi(&self) -> &str {
        &self.npi
    }

    /// Phone number, without the `Phone:` label.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Street line of the practice address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// City, region and postal code line.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Practitioner specialty.
    pub fn specialty(&self) -> Specialty {
        self.specialty
    }
}

/// Returns the four sample providers in directory order.
pub fn sample_providers() -> Vec<Provider> {
    vec![
        Provider::new(
            "Dr. John Smith",
            "1234567890",
            "(555) 123-4567",
            "123 Main Street",
            "New York, NY 10001",
            Specialty::Cardiologist,
        ),
        Provider::new(
            "Dr. Jane Doe",
            "0987654321",
            "(555) 987-6543",
            "456 Oak Avenue",
            "Los Angeles, CA 90001",
            Specialty::Physician,
        ),
        Provider::new(
            "Dr. Michael Johnson",
            "1111111111",
            "(555) 111-2222",
            "789 Elm Street",
            "Chicago, IL 60601",
            Specialty::Dentist,
        ),
        Provider::new(
            "Dr. Sarah Williams",
            "2222222222",
            "(555) 222-3333",
            "321 Pine Road",
            "Houston, TX 77001",
            Specialty::Surgeon,
        ),
    ]
}
