use super::{Crop, Text};

pub static CROPS: &[Crop] = &[
    Crop {
        id: "rice",
        name: Text::new("Rice", "ধান"),
        icon: "🌾",
        description: Text::new(
            "The staple food crop of Bangladesh",
            "বাংলাদেশের প্রধান খাদ্য শস্য",
        ),
        growth_stages: &["Seedling", "Tillering", "Flowering", "Grain filling", "Maturity"],
        common_diseases: &["Blast", "Brown spot", "Sheath blight"],
        care_tips: &[
            "Maintain proper water level",
            "Apply fertilizer at right time",
            "Monitor for pests regularly",
        ],
    },
    Crop {
        id: "dragon-fruit",
        name: Text::new("Dragon Fruit", "ড্রাগন ফল"),
        icon: "🐉",
        description: Text::new(
            "High-value tropical fruit with growing demand",
            "উচ্চ মূল্যের গ্রীষ্মকালীন ফল যার চাহিদা বাড়ছে",
        ),
        growth_stages: &[
            "Planting",
            "Vegetative growth",
            "Flowering",
            "Fruit development",
            "Harvest",
        ],
        common_diseases: &["Root rot", "Stem canker", "Anthracnose"],
        care_tips: &[
            "Provide proper support structure",
            "Ensure good drainage",
            "Regular pruning needed",
        ],
    },
    Crop {
        id: "jute",
        name: Text::new("Jute", "পাট"),
        icon: "🌱",
        description: Text::new(
            "Traditional fiber crop of Bangladesh",
            "বাংলাদেশের ঐতিহ্যবাহী আঁশ জাতীয় ফসল",
        ),
        growth_stages: &[
            "Germination",
            "Vegetative growth",
            "Flowering",
            "Fiber formation",
            "Harvest",
        ],
        common_diseases: &["Stem rot", "Root rot", "Leaf spot"],
        care_tips: &[
            "Sow at right time",
            "Maintain proper plant spacing",
            "Harvest at right maturity",
        ],
    },
    Crop {
        id: "vegetables",
        name: Text::new("Vegetables", "সবজি"),
        icon: "🥬",
        description: Text::new(
            "Various vegetables including tomato, eggplant, cabbage",
            "টমেটো, বেগুন, বাঁধাকপি সহ বিভিন্ন সবজি",
        ),
        growth_stages: &[
            "Seedling",
            "Vegetative growth",
            "Flowering",
            "Fruit development",
            "Harvest",
        ],
        common_diseases: &["Blight", "Wilt", "Aphid infestation"],
        care_tips: &[
            "Regular watering needed",
            "Apply organic fertilizer",
            "Monitor for pest attacks",
        ],
    },
];
