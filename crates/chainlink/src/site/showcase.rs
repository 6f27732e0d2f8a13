//! Industry showcase and customer testimonials.

use serde::Serialize;

/// Filter value that shows every industry.
pub const ALL_INDUSTRIES: &str = "All";

pub const INDUSTRY_FILTERS: &[&str] = &[
    ALL_INDUSTRIES,
    "Manufacturing",
    "Retail",
    "Healthcare",
    "Automotive",
    "Technology",
    "Food & Beverage",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryMetric {
    pub improvement: &'static str,
    pub metric: &'static str,
    pub companies: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Industry {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub metrics: IndustryMetric,
    pub case_study: &'static str,
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        id: "retail",
        title: "Retail & E-commerce",
        category: "Retail",
        description: "Optimize inventory management and demand forecasting for seasonal fluctuations and trending products.",
        challenges: &[
            "Seasonal demand variations",
            "Fast fashion cycles",
            "Multi-channel inventory",
            "Customer expectation management",
        ],
        solutions: &[
            "Real-time demand sensing",
            "Automated replenishment",
            "Cross-channel visibility",
            "Trend-based forecasting",
        ],
        metrics: IndustryMetric {
            improvement: "45%",
            metric: "Inventory Turnover",
            companies: "150+",
        },
        case_study: "Fashion retailer reduced stockouts by 60% during peak season",
    },
    Industry {
        id: "healthcare",
        title: "Healthcare & Pharma",
        category: "Healthcare",
        description: "Ensure compliance and traceability while maintaining critical inventory levels for life-saving products.",
        challenges: &[
            "Regulatory compliance (FDA)",
            "Temperature-sensitive products",
            "Batch tracking requirements",
            "Recall management",
        ],
        solutions: &[
            "Compliance monitoring",
            "Cold chain management",
            "Automated batch tracking",
            "Recall automation",
        ],
        metrics: IndustryMetric {
            improvement: "99.9%",
            metric: "Compliance Rate",
            companies: "85+",
        },
        case_study: "Pharma company achieved 100% batch traceability compliance",
    },
    Industry {
        id: "automotive",
        title: "Automotive",
        category: "Automotive",
        description: "Manage complex supplier networks and ensure just-in-time delivery for manufacturing operations.",
        challenges: &[
            "Just-in-time delivery",
            "Complex part dependencies",
            "Supplier tier management",
            "Quality control integration",
        ],
        solutions: &[
            "JIT optimization",
            "Dependency mapping",
            "Tier visibility",
            "Quality integration",
        ],
        metrics: IndustryMetric {
            improvement: "35%",
            metric: "Lead Time Reduction",
            companies: "120+",
        },
        case_study: "Auto manufacturer reduced production delays by 40%",
    },
    Industry {
        id: "fmcg",
        title: "FMCG & Food",
        category: "Food & Beverage",
        description: "Handle perishable goods with optimized shelf-life management and regulatory compliance.",
        challenges: &[
            "Shelf-life optimization",
            "Food safety regulations",
            "Seasonal demand spikes",
            "Waste reduction",
        ],
        solutions: &[
            "Expiry date tracking",
            "Safety compliance tools",
            "Demand smoothing",
            "Waste analytics",
        ],
        metrics: IndustryMetric {
            improvement: "50%",
            metric: "Waste Reduction",
            companies: "200+",
        },
        case_study: "Food distributor cut waste by 55% with smart forecasting",
    },
    Industry {
        id: "technology",
        title: "Technology & Electronics",
        category: "Technology",
        description: "Navigate component shortages and manage complex global supplier networks.",
        challenges: &[
            "Component shortage prediction",
            "Rapid product lifecycles",
            "Global supplier coordination",
            "Quality assurance",
        ],
        solutions: &[
            "Shortage alerts",
            "Lifecycle planning",
            "Global coordination",
            "Quality tracking",
        ],
        metrics: IndustryMetric {
            improvement: "40%",
            metric: "Component Availability",
            companies: "90+",
        },
        case_study: "Tech company avoided $2M in shortage costs",
    },
    Industry {
        id: "manufacturing",
        title: "Packaging & Materials",
        category: "Manufacturing",
        description: "Optimize material sourcing and promote circular economy practices.",
        challenges: &[
            "Sustainability tracking",
            "Material cost optimization",
            "Circular economy integration",
            "Environmental compliance",
        ],
        solutions: &[
            "Sustainability metrics",
            "Cost optimization",
            "Circular tracking",
            "Environmental monitoring",
        ],
        metrics: IndustryMetric {
            improvement: "30%",
            metric: "Sustainability Score",
            companies: "180+",
        },
        case_study: "Packaging firm achieved carbon-neutral supply chain",
    },
];

/// Industries in the selected category; `"All"` (or an empty filter) shows every one.
pub fn industries_in(category: &str) -> Vec<&'static Industry> {
    INDUSTRIES
        .iter()
        .filter(|industry| {
            category.is_empty() || category == ALL_INDUSTRIES || industry.category == category
        })
        .collect()
}

/// Entry of the success-story timeline on the industries page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuccessStory {
    pub year: &'static str,
    pub company: &'static str,
    pub achievement: &'static str,
    pub industry: &'static str,
}

/// Oldest first.
pub const SUCCESS_STORIES: &[SuccessStory] = &[
    SuccessStory {
        year: "2021",
        company: "Global Retailer",
        achievement: "Reduced inventory costs by $50M",
        industry: "Retail",
    },
    SuccessStory {
        year: "2022",
        company: "Pharma Leader",
        achievement: "Achieved 100% regulatory compliance",
        industry: "Healthcare",
    },
    SuccessStory {
        year: "2023",
        company: "Auto Manufacturer",
        achievement: "Eliminated production delays",
        industry: "Automotive",
    },
    SuccessStory {
        year: "2024",
        company: "Food Distributor",
        achievement: "Cut waste by 60% with AI forecasting",
        industry: "Food & Beverage",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "ChainLink Pro transformed our supply chain efficiency by 40%. The AI forecasting is incredibly accurate.",
        author: "Sarah Johnson",
        role: "Supply Chain Director",
        company: "TechCorp Industries",
        rating: 5,
    },
    Testimonial {
        quote: "The risk assessment features helped us avoid major disruptions during the global supply crisis.",
        author: "Michael Chen",
        role: "Operations Manager",
        company: "Global Manufacturing",
        rating: 5,
    },
    Testimonial {
        quote: "Finding reliable suppliers has never been easier. The directory is comprehensive and trustworthy.",
        author: "Emily Rodriguez",
        role: "Procurement Lead",
        company: "Healthcare Solutions",
        rating: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_every_industry() {
        assert_eq!(industries_in(ALL_INDUSTRIES).len(), INDUSTRIES.len());
        assert_eq!(industries_in("").len(), INDUSTRIES.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let picked = industries_in("Food & Beverage");
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, "fmcg");
        assert!(industries_in("food & beverage").is_empty());
    }

    #[test]
    fn every_industry_is_reachable_through_a_filter() {
        for industry in INDUSTRIES {
            assert!(INDUSTRY_FILTERS.contains(&industry.category), "{}", industry.id);
        }
    }

    #[test]
    fn success_stories_run_in_year_order() {
        assert!(SUCCESS_STORIES
            .windows(2)
            .all(|pair| pair[0].year < pair[1].year));
        for story in SUCCESS_STORIES {
            assert!(INDUSTRY_FILTERS.contains(&story.industry), "{}", story.company);
        }
    }
}
