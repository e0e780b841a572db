/// Icon bucket for an activity, picked by keyword. The keywords are the
/// deployed-locale ones, matched case-sensitively against the raw field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivityKind {
    Walk,
    Meal,
    Coffee,
    Other,
}

impl ActivityKind {
    pub fn for_activity(activity: &str) -> Self {
        if activity.contains("Paseo") || activity.contains("barrio") {
            ActivityKind::Walk
        } else if activity.contains("Almuerzo") || activity.contains("Cena") {
            ActivityKind::Meal
        } else if activity.contains("Café") || activity.contains("Merienda") {
            ActivityKind::Coffee
        } else {
            ActivityKind::Other
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ActivityKind::Walk => "icon-walk",
            ActivityKind::Meal => "icon-meal",
            ActivityKind::Coffee => "icon-coffee",
            ActivityKind::Other => "icon-other",
        }
    }
}

/// Badge color bucket for the recommended transport mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransportKind {
    Foot,
    Taxi,
    Transit,
    Bike,
    Other,
}

impl TransportKind {
    pub fn for_transport(transport: &str) -> Self {
        if transport.contains("pie") {
            TransportKind::Foot
        } else if transport.contains("Taxi") {
            TransportKind::Taxi
        } else if transport.contains("Metro")
            || transport.contains("Tranvía")
            || transport.contains("Autobús")
        {
            TransportKind::Transit
        } else if transport.contains("Bici") {
            TransportKind::Bike
        } else {
            TransportKind::Other
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TransportKind::Foot => "transport-foot",
            TransportKind::Taxi => "transport-taxi",
            TransportKind::Transit => "transport-transit",
            TransportKind::Bike => "transport-bike",
            TransportKind::Other => "transport-other",
        }
    }
}
