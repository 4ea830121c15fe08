//! Fixed storefront taxonomy: the top-level categories and the curated
//! stock photography each category draws its product images from.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Men,
    Women,
    Kids,
    Footwear,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Men, Category::Women, Category::Kids, Category::Footwear];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Kids => "Kids",
            Category::Footwear => "Footwear",
        }
    }

    pub fn image_pool(self) -> &'static [&'static str] {
        match self {
            Category::Men => MEN_IMAGES,
            Category::Women => WOMEN_IMAGES,
            Category::Kids => KIDS_IMAGES,
            Category::Footwear => FOOTWEAR_IMAGES,
        }
    }

    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Category::Men => &["White", "Black", "Navy", "Gray", "Olive"],
            Category::Women => &["Black", "White", "Red", "Beige", "Pink"],
            Category::Kids => &["Yellow", "Blue", "Green", "Pink", "Red"],
            Category::Footwear => &["White", "Black", "Brown", "Tan"],
        }
    }

    pub fn sizes(self) -> &'static [&'static str] {
        match self {
            Category::Men | Category::Women => &["XS", "S", "M", "L", "XL", "XXL"],
            Category::Kids => &["2T", "3T", "4T", "5", "6", "7", "8"],
            Category::Footwear => &["6", "7", "8", "9", "10", "11", "12"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every product in a seeded catalog carries this sub-category.
pub const PLACEHOLDER_SUB_CATEGORY: &str = "T-Shirts";

const MEN_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1617137968427-85924c800a22?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1593030761757-71bd90dbe3e4?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1576566588028-4147f3842f27?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1591047139829-d91aecb6caea?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1620799140408-ed5341cd2431?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1618354691373-d851c5c3a990?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1559551409-dadc959f76b8?auto=format&fit=crop&w=800&q=80",
];

const WOMEN_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1539008835657-9e8e9680c956?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1550614000-4b9519e09d06?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1550418290-a8d86ad85ab2?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1582142327305-64903328e121?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1564584217132-2271feaeb3c5?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?auto=format&fit=crop&w=800&q=80",
];

// The second kid shot appears twice, so it is drawn twice as often.
const KIDS_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1519238806101-512201f8d98d?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1519457431-44ccd64a579b?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1622290291353-ed07cefe83fb?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1519457431-44ccd64a579b?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1604467794349-0b74285de7e7?auto=format&fit=crop&w=800&q=80",
];

const FOOTWEAR_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1549298916-b41d501d3772?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1560769629-975e13f0c470?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1562183241-b937e95585b6?auto=format&fit=crop&w=800&q=80",
];
