//! Seed data for the supplier directory.

use super::domain::{DirectoryEntry, EntryId, ALL_CATEGORIES, ALL_LOCATIONS, ALL_SIZES};

struct Seed {
    id: u32,
    name: &'static str,
    location: &'static str,
    category: &'static str,
    size: &'static str,
    capacity: &'static str,
    rating: f32,
    reviews: u32,
    certifications: &'static [&'static str],
    specialties: &'static [&'static str],
    established: &'static str,
    employees: &'static str,
}

impl Seed {
    fn entry(&self) -> DirectoryEntry {
        DirectoryEntry {
            id: EntryId(self.id),
            name: self.name.to_string(),
            location: self.location.to_string(),
            category: self.category.to_string(),
            size: self.size.to_string(),
            capacity: self.capacity.to_string(),
            rating: self.rating,
            reviews: self.reviews,
            certifications: owned(self.certifications),
            specialties: owned(self.specialties),
            established: self.established.to_string(),
            employees: self.employees.to_string(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        name: "TechComponents Ltd",
        location: "Shenzhen, China",
        category: "Electronics",
        size: "Large",
        capacity: "10M+ units/month",
        rating: 4.8,
        reviews: 127,
        certifications: &["ISO 9001", "RoHS", "CE"],
        specialties: &["Semiconductors", "PCB Assembly", "IoT Devices"],
        established: "2008",
        employees: "5000+",
    },
    Seed {
        id: 2,
        name: "GreenPack Solutions",
        location: "Munich, Germany",
        category: "Packaging",
        size: "Medium",
        capacity: "5M+ units/month",
        rating: 4.9,
        reviews: 89,
        certifications: &["FSC", "ISO 14001", "BRC"],
        specialties: &["Sustainable Packaging", "Biodegradable Materials", "Custom Design"],
        established: "2015",
        employees: "500-1000",
    },
    Seed {
        id: 3,
        name: "MediSupply Corp",
        location: "Boston, USA",
        category: "Healthcare",
        size: "Large",
        capacity: "2M+ units/month",
        rating: 4.7,
        reviews: 156,
        certifications: &["FDA", "ISO 13485", "GMP"],
        specialties: &["Medical Devices", "Surgical Instruments", "Diagnostics"],
        established: "1995",
        employees: "2000+",
    },
    Seed {
        id: 4,
        name: "AutoParts International",
        location: "Guadalajara, Mexico",
        category: "Automotive",
        size: "Large",
        capacity: "1M+ parts/month",
        rating: 4.6,
        reviews: 203,
        certifications: &["IATF 16949", "ISO 9001", "VDA"],
        specialties: &["Engine Components", "Transmission Parts", "Electronics"],
        established: "2003",
        employees: "3000+",
    },
    Seed {
        id: 5,
        name: "FreshFood Distributors",
        location: "Amsterdam, Netherlands",
        category: "Food & Beverage",
        size: "Medium",
        capacity: "500K+ units/month",
        rating: 4.8,
        reviews: 92,
        certifications: &["BRC", "IFS", "Organic"],
        specialties: &["Organic Produce", "Frozen Foods", "Dairy Products"],
        established: "2010",
        employees: "200-500",
    },
    Seed {
        id: 6,
        name: "TextilePro Manufacturing",
        location: "Istanbul, Turkey",
        category: "Textiles",
        size: "Medium",
        capacity: "2M+ units/month",
        rating: 4.5,
        reviews: 74,
        certifications: &["OEKO-TEX", "GOTS", "ISO 9001"],
        specialties: &["Sustainable Fabrics", "Technical Textiles", "Fashion"],
        established: "2001",
        employees: "1000+",
    },
    Seed {
        id: 7,
        name: "ChemPure Industries",
        location: "Mumbai, India",
        category: "Chemicals",
        size: "Large",
        capacity: "50K+ tons/month",
        rating: 4.4,
        reviews: 111,
        certifications: &["ISO 9001", "OHSAS 18001", "ISO 14001"],
        specialties: &["Industrial Chemicals", "Specialty Chemicals", "Polymers"],
        established: "1987",
        employees: "4000+",
    },
    Seed {
        id: 8,
        name: "MetalCraft Solutions",
        location: "Birmingham, UK",
        category: "Metals",
        size: "Medium",
        capacity: "10K+ tons/month",
        rating: 4.7,
        reviews: 66,
        certifications: &["ISO 9001", "AS9100", "NADCAP"],
        specialties: &["Precision Machining", "Casting", "Surface Treatment"],
        established: "1978",
        employees: "800+",
    },
];

/// The listed manufacturers in display order.
pub fn manufacturers() -> Vec<DirectoryEntry> {
    SEEDS.iter().map(Seed::entry).collect()
}

/// Location selector options. Matching is by substring, so countries select their cities.
pub const LOCATIONS: &[&str] = &[
    ALL_LOCATIONS,
    "China",
    "Germany",
    "USA",
    "Mexico",
    "Netherlands",
    "Turkey",
    "India",
    "UK",
];

pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Electronics",
    "Packaging",
    "Healthcare",
    "Automotive",
    "Food & Beverage",
    "Textiles",
    "Chemicals",
    "Metals",
];

pub const SIZES: &[&str] = &[ALL_SIZES, "Small", "Medium", "Large", "Enterprise"];
