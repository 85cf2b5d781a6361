use chrono::Utc;
use salus::models::{Doctor, Facility, Treatment};

/// Builder for facility fixtures. Defaults are valid and boring; override
/// only what the test cares about.
pub struct FacilityBuilder {
    facility: Facility,
}

impl FacilityBuilder {
    pub fn new(id: i64) -> Self {
        let now = Utc::now();
        Self {
            facility: Facility {
                id,
                name: format!("Facility {id}"),
                location: "Bangkok, Thailand".to_string(),
                country: "Thailand".to_string(),
                region: "asia".to_string(),
                specialty: "General Surgery".to_string(),
                rating: 4.0,
                review_count: 100,
                accreditation: vec!["JCI".to_string()],
                price_range: "$5,000 - $15,000".to_string(),
                estimated_cost: 10_000.0,
                languages: vec!["English".to_string(), "Thai".to_string()],
                wait_time: "1-2 weeks".to_string(),
                description: "A well regarded international hospital".to_string(),
                contact_phone: "+66 2 000 0000".to_string(),
                contact_email: "info@example.com".to_string(),
                contact_website: "https://example.com".to_string(),
                address: "1 Hospital Road".to_string(),
                established: "1980".to_string(),
                beds: "500".to_string(),
                departments: vec!["Cardiology".to_string()],
                image_urls: Vec::new(),
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.facility.name = name.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.facility.country = country.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.facility.region = region.into();
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.facility.specialty = specialty.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.facility.description = description.into();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.facility.rating = rating;
        self
    }

    pub fn estimated_cost(mut self, cost: f64) -> Self {
        self.facility.estimated_cost = cost;
        self
    }

    pub fn build(self) -> Facility {
        self.facility
    }
}

/// A treatment fixture attached to a facility.
pub fn treatment(id: i64, facility_id: i64, name: &str) -> Treatment {
    let now = Utc::now();
    Treatment {
        id,
        facility_id,
        name: name.to_string(),
        price_range: "$8,000 - $12,000".to_string(),
        duration: "3-5 days".to_string(),
        recovery: "2-4 weeks".to_string(),
        description: format!("{name} performed by senior staff"),
        created_at: now,
        updated_at: now,
    }
}

/// A doctor fixture attached to a facility.
pub fn doctor(id: i64, facility_id: i64, name: &str) -> Doctor {
    let now = Utc::now();
    Doctor {
        id,
        facility_id,
        name: name.to_string(),
        specialty: "Cardiology".to_string(),
        experience: "15 years".to_string(),
        education: "MD, Chulalongkorn University".to_string(),
        languages: vec!["English".to_string()],
        image_url: "https://example.com/doctor.jpg".to_string(),
        created_at: now,
        updated_at: now,
    }
}
