//! The output record: one struct per input data row.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::field::Field;

/// Render a date the way the output formats expect it: `M/D/YYYY`, no
/// zero padding.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => String::new(),
    }
}

fn serialize_date<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_str(&format_date(Some(*date))),
        None => serializer.serialize_none(),
    }
}

/// One normalized customer/vehicle record.
///
/// String fields default to empty, date fields to absent. Fields with no
/// mapped column keep their defaults; that is not an error.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Full_name")]
    pub fullname: String,
    #[serde(rename = "First_name")]
    pub firstname: String,
    #[serde(rename = "Middle_name")]
    pub middle_initial: String,
    #[serde(rename = "Last_name")]
    pub lastname: String,
    #[serde(rename = "Address_1")]
    pub address1: String,
    #[serde(rename = "Address_2")]
    pub address2: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Zip")]
    pub zip: String,
    #[serde(rename = "Zip_4")]
    pub zip4: String,
    #[serde(rename = "Home_phone")]
    pub home_phone: String,
    #[serde(rename = "Business_phone")]
    pub business_phone: String,
    #[serde(rename = "Mobile_phone")]
    pub mobile_phone: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "VIN")]
    pub vin: String,
    #[serde(rename = "Veh_Year")]
    pub vehicle_year: String,
    #[serde(rename = "Veh_Make")]
    pub make: String,
    #[serde(rename = "Veh_Model")]
    pub model: String,
    #[serde(rename = "Delivery_date", serialize_with = "serialize_date")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(rename = "Last_service_date", serialize_with = "serialize_date")]
    pub last_service_date: Option<NaiveDate>,
    #[serde(rename = "DSF_Walk_Sequence")]
    pub dsf_walk_sequence: String,
    #[serde(rename = "CRRT")]
    pub crrt: String,
    #[serde(rename = "KBB")]
    pub kbb: String,
}

impl Record {
    /// Assign a formatted value to a string-typed field. Date fields are
    /// not assignable here; use [`Record::set_date`].
    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Fullname => self.fullname = value,
            Field::Firstname => self.firstname = value,
            Field::MiddleInitial => self.middle_initial = value,
            Field::Lastname => self.lastname = value,
            Field::Address1 => self.address1 = value,
            Field::Address2 => self.address2 = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
            Field::Zip => self.zip = value,
            Field::Zip4 => self.zip4 = value,
            Field::HomePhone => self.home_phone = value,
            Field::BusinessPhone => self.business_phone = value,
            Field::MobilePhone => self.mobile_phone = value,
            Field::Email => self.email = value,
            Field::Vin => self.vin = value,
            Field::VehicleYear => self.vehicle_year = value,
            Field::Make => self.make = value,
            Field::Model => self.model = value,
            Field::DsfWalkSequence => self.dsf_walk_sequence = value,
            Field::Crrt => self.crrt = value,
            Field::Kbb => self.kbb = value,
            Field::DeliveryDate | Field::LastServiceDate => {}
        }
    }

    /// Assign a parsed value to a date-typed field.
    pub fn set_date(&mut self, field: Field, value: Option<NaiveDate>) {
        match field {
            Field::DeliveryDate => self.delivery_date = value,
            Field::LastServiceDate => self.last_service_date = value,
            _ => {}
        }
    }

    /// The field's output text: the string value as-is, or the rendered
    /// date (`M/D/YYYY`, empty when absent).
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Fullname => self.fullname.clone(),
            Field::Firstname => self.firstname.clone(),
            Field::MiddleInitial => self.middle_initial.clone(),
            Field::Lastname => self.lastname.clone(),
            Field::Address1 => self.address1.clone(),
            Field::Address2 => self.address2.clone(),
            Field::City => self.city.clone(),
            Field::State => self.state.clone(),
            Field::Zip => self.zip.clone(),
            Field::Zip4 => self.zip4.clone(),
            Field::HomePhone => self.home_phone.clone(),
            Field::BusinessPhone => self.business_phone.clone(),
            Field::MobilePhone => self.mobile_phone.clone(),
            Field::Email => self.email.clone(),
            Field::Vin => self.vin.clone(),
            Field::VehicleYear => self.vehicle_year.clone(),
            Field::Make => self.make.clone(),
            Field::Model => self.model.clone(),
            Field::DeliveryDate => format_date(self.delivery_date),
            Field::LastServiceDate => format_date(self.last_service_date),
            Field::DsfWalkSequence => self.dsf_walk_sequence.clone(),
            Field::Crrt => self.crrt.clone(),
            Field::Kbb => self.kbb.clone(),
        }
    }
}
