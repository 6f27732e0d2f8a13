//! Platform feature catalog and pricing plans shown on the features page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub metrics: &'static [&'static str],
    /// Label of the feature's call-to-action button.
    pub cta: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        id: "forecasting",
        title: "AI Demand Forecasting",
        description: "Advanced machine learning algorithms analyze historical data, market trends, and external factors to predict demand with 95% accuracy.",
        benefits: &[
            "Reduce inventory costs by 30%",
            "Minimize stockouts and overstock",
            "Improve cash flow management",
            "Real-time demand signals",
        ],
        metrics: &["95% accuracy", "30% inventory reduction", "24/7 monitoring"],
        cta: "Try Demo",
    },
    Feature {
        id: "risk",
        title: "Risk Assessment & Analytics",
        description: "Comprehensive risk management with real-time monitoring, supplier scoring, and proactive mitigation strategies.",
        benefits: &[
            "Early warning system for disruptions",
            "Supplier reliability scoring",
            "Geopolitical risk analysis",
            "Automated contingency planning",
        ],
        metrics: &["99% uptime", "40% risk reduction", "Real-time alerts"],
        cta: "View Sample Report",
    },
    Feature {
        id: "directory",
        title: "Manufacturer Directory & Networking",
        description: "Connect with verified manufacturers and suppliers worldwide through our comprehensive directory platform.",
        benefits: &[
            "Access to 10,000+ verified suppliers",
            "Quality certification tracking",
            "Streamlined RFQ process",
            "Secure communication platform",
        ],
        metrics: &["10,000+ suppliers", "95% match rate", "50+ countries"],
        cta: "Explore Directory",
    },
    Feature {
        id: "logistics",
        title: "Inventory & Logistics Tracking",
        description: "End-to-end visibility of your inventory and shipments with real-time tracking and automated reporting.",
        benefits: &[
            "Real-time shipment tracking",
            "Automated inventory updates",
            "Performance analytics",
            "Integration with major carriers",
        ],
        metrics: &["100% visibility", "25% faster delivery", "15+ integrations"],
        cta: "Calculate Savings",
    },
];

/// Looks a feature up by its anchor id, e.g. `"risk"`.
pub fn feature(id: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|feature| feature.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    /// Billing period suffix; empty for custom pricing.
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: "$0",
        period: "/month",
        description: "Perfect for small businesses getting started",
        features: &[
            "Basic demand forecasting",
            "Up to 100 SKUs",
            "Email support",
            "Basic reporting",
        ],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Pro",
        price: "$299",
        period: "/month",
        description: "Advanced features for growing businesses",
        features: &[
            "Advanced AI forecasting",
            "Up to 10,000 SKUs",
            "Risk assessment tools",
            "Priority support",
            "Custom integrations",
            "Advanced analytics",
        ],
        cta: "Start Trial",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "Tailored solutions for large organizations",
        features: &[
            "Unlimited SKUs",
            "Full platform access",
            "Dedicated support team",
            "Custom development",
            "SLA guarantees",
            "White-label options",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_addressable_by_id() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(
            feature("directory").map(|feature| feature.cta),
            Some("Explore Directory")
        );
        assert!(feature("billing").is_none());
    }

    #[test]
    fn exactly_one_plan_is_highlighted() {
        let popular: Vec<_> = PLANS
            .iter()
            .filter(|plan| plan.popular)
            .map(|plan| plan.name)
            .collect();
        assert_eq!(popular, vec!["Pro"]);
    }
}
