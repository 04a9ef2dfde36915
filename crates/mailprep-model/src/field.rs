//! The semantic field registry.
//!
//! Every output attribute the pipeline knows about is one [`Field`] variant.
//! The registry ties each field to its canonical name, its published JSON
//! name, the header pattern that recognizes incoming CSV columns, and the
//! formatting rule applied to its values. All of it is plain data iterated
//! directly — no runtime tag inspection.

use std::fmt;

/// Formatting rule applied to a field's raw cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Lower-case, then capitalize each whitespace-separated token, then trim.
    TitleCase,
    /// Upper-case, then trim.
    Upper,
    /// Lower-case, then trim.
    Lower,
    /// Strip separators, then format 10- or 7-digit strings as a phone number.
    Phone,
    /// Remove the canonical separator character set.
    StripSeparators,
    /// Keep the cell value as ingested.
    Passthrough,
    /// Parse through the ordered date layout list.
    Date,
}

impl FormatRule {
    /// Short label used in the `fields` listing.
    pub fn label(self) -> &'static str {
        match self {
            Self::TitleCase => "title-case",
            Self::Upper => "upper-case",
            Self::Lower => "lower-case",
            Self::Phone => "phone",
            Self::StripSeparators => "strip-separators",
            Self::Passthrough => "passthrough",
            Self::Date => "date",
        }
    }
}

/// One semantic output field, independent of the literal CSV column that
/// supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Fullname,
    Firstname,
    MiddleInitial,
    Lastname,
    Address1,
    Address2,
    City,
    State,
    Zip,
    Zip4,
    HomePhone,
    BusinessPhone,
    MobilePhone,
    Email,
    Vin,
    VehicleYear,
    Make,
    Model,
    DeliveryDate,
    LastServiceDate,
    DsfWalkSequence,
    Crrt,
    Kbb,
}

/// All fields in canonical output order.
pub const FIELDS: [Field; 23] = [
    Field::Fullname,
    Field::Firstname,
    Field::MiddleInitial,
    Field::Lastname,
    Field::Address1,
    Field::Address2,
    Field::City,
    Field::State,
    Field::Zip,
    Field::Zip4,
    Field::HomePhone,
    Field::BusinessPhone,
    Field::MobilePhone,
    Field::Email,
    Field::Vin,
    Field::VehicleYear,
    Field::Make,
    Field::Model,
    Field::DeliveryDate,
    Field::LastServiceDate,
    Field::DsfWalkSequence,
    Field::Crrt,
    Field::Kbb,
];

/// Fields that strict mode requires a mapped column for.
pub const REQUIRED_FIELDS: [Field; 6] = [
    Field::Firstname,
    Field::Lastname,
    Field::Address1,
    Field::City,
    Field::State,
    Field::Zip,
];

impl Field {
    /// Canonical snake_case name: CSV output header and `--fields` token.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fullname => "fullname",
            Self::Firstname => "firstname",
            Self::MiddleInitial => "middle_initial",
            Self::Lastname => "lastname",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Zip4 => "zip4",
            Self::HomePhone => "home_phone",
            Self::BusinessPhone => "business_phone",
            Self::MobilePhone => "mobile_phone",
            Self::Email => "email",
            Self::Vin => "vin",
            Self::VehicleYear => "vehicle_year",
            Self::Make => "make",
            Self::Model => "model",
            Self::DeliveryDate => "delivery_date",
            Self::LastServiceDate => "last_service_date",
            Self::DsfWalkSequence => "dsf_walk_sequence",
            Self::Crrt => "crrt",
            Self::Kbb => "kbb",
        }
    }

    /// Published JSON object key.
    pub fn json_name(self) -> &'static str {
        match self {
            Self::Fullname => "Full_name",
            Self::Firstname => "First_name",
            Self::MiddleInitial => "Middle_name",
            Self::Lastname => "Last_name",
            Self::Address1 => "Address_1",
            Self::Address2 => "Address_2",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "Zip",
            Self::Zip4 => "Zip_4",
            Self::HomePhone => "Home_phone",
            Self::BusinessPhone => "Business_phone",
            Self::MobilePhone => "Mobile_phone",
            Self::Email => "Email",
            Self::Vin => "VIN",
            Self::VehicleYear => "Veh_Year",
            Self::Make => "Veh_Make",
            Self::Model => "Veh_Model",
            Self::DeliveryDate => "Delivery_date",
            Self::LastServiceDate => "Last_service_date",
            Self::DsfWalkSequence => "DSF_Walk_Sequence",
            Self::Crrt => "CRRT",
            Self::Kbb => "KBB",
        }
    }

    /// Anchored header pattern, matched case-insensitively against trimmed
    /// incoming column names. Each pattern carries the synonyms seen in
    /// real exports (`st`, `postal code`, `hph`, `vyr`, ...).
    pub fn header_pattern(self) -> &'static str {
        match self {
            Self::Fullname => r"^full[ _-]?name$",
            Self::Firstname => r"^first[ _-]?name$",
            Self::MiddleInitial => r"^mi$|^middle[ _-]?(initial|name)$",
            Self::Lastname => r"^last[ _-]?name$",
            Self::Address1 => r"^address[ _-]?1?$",
            Self::Address2 => r"^address[ _-]?2$",
            Self::City => r"^city$",
            Self::State => r"^state$|^st$",
            Self::Zip => r"^(zip|postal)[ _]?(code)?$",
            Self::Zip4 => r"^zip4$|^4zip$",
            Self::HomePhone => r"^hph$|^home[ _]phone$",
            Self::BusinessPhone => r"^bph$|^(work|business)[ _]phone$",
            Self::MobilePhone => r"^cph$|^mobile[ _]phone$",
            Self::Email => r"^email[ _]?(address)?$",
            Self::Vin => r"^vin$",
            Self::VehicleYear => r"^year$|^vyr$",
            Self::Make => r"^make$|^vmk$",
            Self::Model => r"^model$|^vmd$",
            Self::DeliveryDate => r"^del[ ]?date$|^delivery[ _]?date$",
            Self::LastServiceDate => r"^date$|^last[ _]service[ _]date$",
            Self::DsfWalkSequence => r"^dsf[ _]?walk[ _]?seq(uence)?$",
            Self::Crrt => r"^crrt$",
            Self::Kbb => r"^kbb$",
        }
    }

    /// The formatting rule for this field's values.
    pub fn format_rule(self) -> FormatRule {
        match self {
            Self::Fullname
            | Self::Firstname
            | Self::Lastname
            | Self::Address1
            | Self::Address2
            | Self::City
            | Self::Make
            | Self::Model => FormatRule::TitleCase,
            Self::MiddleInitial
            | Self::State
            | Self::Vin
            | Self::DsfWalkSequence
            | Self::Crrt
            | Self::Kbb => FormatRule::Upper,
            Self::Email => FormatRule::Lower,
            Self::HomePhone | Self::BusinessPhone | Self::MobilePhone => FormatRule::Phone,
            Self::Zip | Self::Zip4 | Self::VehicleYear => FormatRule::Passthrough,
            Self::DeliveryDate | Self::LastServiceDate => FormatRule::Date,
        }
    }

    /// True for the two date-typed fields.
    pub fn is_date(self) -> bool {
        self.format_rule() == FormatRule::Date
    }

    /// Look a field up by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        FIELDS.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_roundtrip() {
        for field in FIELDS {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("position"), None);
    }

    #[test]
    fn format_table_matches_contract() {
        assert_eq!(Field::Fullname.format_rule(), FormatRule::TitleCase);
        assert_eq!(Field::MiddleInitial.format_rule(), FormatRule::Upper);
        assert_eq!(Field::Email.format_rule(), FormatRule::Lower);
        assert_eq!(Field::HomePhone.format_rule(), FormatRule::Phone);
        assert_eq!(Field::Zip.format_rule(), FormatRule::Passthrough);
        assert!(Field::DeliveryDate.is_date());
        assert!(Field::LastServiceDate.is_date());
        assert!(!Field::Zip.is_date());
    }

    #[test]
    fn required_set_is_the_strict_contract() {
        let names: Vec<&str> = REQUIRED_FIELDS.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec!["firstname", "lastname", "address1", "city", "state", "zip"]
        );
    }
}
