//! Resource Catalog
//!
//! One descriptor per resource family of the platform, carrying its key
//! namespace, the TTL tier of each read kind, and the extra key families a
//! write to it stales.

use crate::config::Tier;

// == Resource Spec ==
/// Caching policy for one backend resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    /// Key namespace; doubles as the backend resource name
    pub namespace: &'static str,
    /// Tier for single-entity reads
    pub detail_tier: Tier,
    /// Tier for list/search reads
    pub list_tier: Tier,
    /// Tier for aggregate statistics
    pub stats_tier: Tier,
    /// Key prefixes outside this namespace that any write here stales
    pub also_invalidates: &'static [&'static str],
}

/// Property listings. Search results churn with every edit; occupancy and
/// rating aggregates move slowly.
pub const PROPERTIES: ResourceSpec = ResourceSpec {
    namespace: "properties",
    detail_tier: Tier::Medium,
    list_tier: Tier::Short,
    stats_tier: Tier::Long,
    also_invalidates: &[],
};

/// Bookings. A status change (request, payment, confirmation, completion,
/// cancellation) also stales the availability calendar and the property
/// aggregates derived from it.
pub const BOOKINGS: ResourceSpec = ResourceSpec {
    namespace: "bookings",
    detail_tier: Tier::Medium,
    list_tier: Tier::Short,
    stats_tier: Tier::Long,
    also_invalidates: &["availability:", "properties:stats"],
};

/// Guest accounts.
pub const GUESTS: ResourceSpec = ResourceSpec {
    namespace: "guests",
    detail_tier: Tier::Medium,
    list_tier: Tier::Short,
    stats_tier: Tier::Long,
    also_invalidates: &[],
};

/// Host accounts.
pub const HOSTS: ResourceSpec = ResourceSpec {
    namespace: "hosts",
    detail_tier: Tier::Medium,
    list_tier: Tier::Short,
    stats_tier: Tier::Long,
    also_invalidates: &[],
};

/// Guest reviews. A new or edited review changes the reviewed property's
/// rating; which property is not known at this level, so the whole detail
/// family goes along with the property aggregates.
pub const REVIEWS: ResourceSpec = ResourceSpec {
    namespace: "reviews",
    detail_tier: Tier::Medium,
    list_tier: Tier::Short,
    stats_tier: Tier::Long,
    also_invalidates: &["properties:detail:", "properties:stats"],
};

/// Availability calendars, the most volatile reads on the site.
pub const AVAILABILITY: ResourceSpec = ResourceSpec {
    namespace: "availability",
    detail_tier: Tier::Short,
    list_tier: Tier::Short,
    stats_tier: Tier::Short,
    also_invalidates: &[],
};

/// Contact messages.
pub const MESSAGES: ResourceSpec = ResourceSpec {
    namespace: "messages",
    detail_tier: Tier::Medium,
    list_tier: Tier::Short,
    stats_tier: Tier::Long,
    also_invalidates: &[],
};

/// Payment-method configuration, effectively static between admin edits.
pub const PAYMENT_CONFIG: ResourceSpec = ResourceSpec {
    namespace: "payment-config",
    detail_tier: Tier::Long,
    list_tier: Tier::Long,
    stats_tier: Tier::Long,
    also_invalidates: &[],
};

/// Every resource family the platform caches.
pub const ALL: [ResourceSpec; 8] = [
    PROPERTIES,
    BOOKINGS,
    GUESTS,
    HOSTS,
    REVIEWS,
    AVAILABILITY,
    MESSAGES,
    PAYMENT_CONFIG,
];
