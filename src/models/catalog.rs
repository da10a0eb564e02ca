use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
    Consultation,
    Treatment,
    Premium,
    Vip,
}

impl ServiceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceId::Consultation => "consultation",
            ServiceId::Treatment => "treatment",
            ServiceId::Premium => "premium",
            ServiceId::Vip => "vip",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "consultation" => Some(ServiceId::Consultation),
            "treatment" => Some(ServiceId::Treatment),
            "premium" => Some(ServiceId::Premium),
            "vip" => Some(ServiceId::Vip),
            _ => None,
        }
    }

    pub fn details(&self) -> &'static Service {
        // SERVICES covers every variant, so the lookup cannot miss.
        SERVICES
            .iter()
            .find(|s| s.id == *self)
            .unwrap_or(&SERVICES[0])
    }
}

/// One entry of the bookable-service catalog. Static configuration,
/// never persisted and never user-editable.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: &'static str,
    pub duration: &'static str,
    pub duration_minutes: i32,
    pub price: &'static str,
}

pub static SERVICES: [Service; 4] = [
    Service {
        id: ServiceId::Consultation,
        name: "Consultation",
        duration: "30 min",
        duration_minutes: 30,
        price: "$75",
    },
    Service {
        id: ServiceId::Treatment,
        name: "Full Treatment",
        duration: "60 min",
        duration_minutes: 60,
        price: "$150",
    },
    Service {
        id: ServiceId::Premium,
        name: "Premium Experience",
        duration: "90 min",
        duration_minutes: 90,
        price: "$225",
    },
    Service {
        id: ServiceId::Vip,
        name: "VIP Session",
        duration: "120 min",
        duration_minutes: 120,
        price: "$350",
    },
];

/// Fixed set of bookable start times. Note the gap at 13:00.
pub const TIME_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
];

pub fn is_valid_slot(time: &str) -> bool {
    TIME_SLOTS.contains(&time)
}
