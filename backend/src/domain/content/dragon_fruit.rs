use super::{
    DragonFruitStage, FertilizerScheduleEntry, PestDisease, PestDiseaseKind, SoilRequirement,
    Text,
};

pub static DRAGON_FRUIT_STAGES: &[DragonFruitStage] = &[
    DragonFruitStage {
        id: "nursery",
        name: Text::new("Nursery & Propagation", "নার্সারি ও বংশবিস্তার"),
        duration: Text::new("2-3 months", "২-৩ মাস"),
        description: Text::new(
            "Start with healthy stem cuttings for best results",
            "সর্বোত্তম ফলাফলের জন্য সুস্থ কাণ্ডের কাটিং দিয়ে শুরু করুন",
        ),
        care_tips: &[
            Text::new(
                "Use 30-50 cm long stem cuttings",
                "৩০-৫০ সেমি লম্বা কাণ্ডের কাটিং ব্যবহার করুন",
            ),
            Text::new(
                "Let cuttings dry for 2-3 days before planting",
                "রোপণের আগে কাটিং ২-৩ দিন শুকাতে দিন",
            ),
            Text::new(
                "Plant in well-draining sandy soil mix",
                "ভালো নিষ্কাশনযুক্ত বালুকাময় মাটির মিশ্রণে রোপণ করুন",
            ),
            Text::new(
                "Keep in partial shade during rooting",
                "শিকড় গজানোর সময় আংশিক ছায়ায় রাখুন",
            ),
            Text::new(
                "Water moderately - avoid overwatering",
                "পরিমিত পানি দিন - অতিরিক্ত পানি এড়িয়ে চলুন",
            ),
        ],
    },
    DragonFruitStage {
        id: "vegetative",
        name: Text::new("Vegetative Growth", "উদ্ভিদ বৃদ্ধি"),
        duration: Text::new("12-18 months", "১২-১৮ মাস"),
        description: Text::new(
            "Focus on strong stem and root development",
            "শক্তিশালী কাণ্ড ও শিকড় বিকাশে মনোযোগ দিন",
        ),
        care_tips: &[
            Text::new(
                "Provide strong support structure (trellis/pole)",
                "শক্তিশালী সাপোর্ট কাঠামো দিন (ট্রেলিস/খুঁটি)",
            ),
            Text::new(
                "Regular watering but ensure good drainage",
                "নিয়মিত পানি দিন কিন্তু ভালো নিষ্কাশন নিশ্চিত করুন",
            ),
            Text::new("Apply balanced fertilizer monthly", "মাসিক সুষম সার প্রয়োগ করুন"),
            Text::new(
                "Prune excess branches to maintain 2-3 main stems",
                "২-৩টি প্রধান কাণ্ড রাখতে অতিরিক্ত ডাল ছাঁটাই করুন",
            ),
            Text::new(
                "Monitor for pests and diseases",
                "পোকামাকড় ও রোগের জন্য নিয়মিত পর্যবেক্ষণ করুন",
            ),
        ],
    },
    DragonFruitStage {
        id: "flowering",
        name: Text::new("Flowering Stage", "ফুল ফোটার পর্যায়"),
        duration: Text::new("2-3 years after planting", "রোপণের ২-৩ বছর পর"),
        description: Text::new(
            "Beautiful white flowers bloom at night",
            "সুন্দর সাদা ফুল রাতে ফোটে",
        ),
        care_tips: &[
            Text::new(
                "Flowers bloom at night and close by morning",
                "ফুল রাতে ফোটে এবং সকালে বন্ধ হয়ে যায়",
            ),
            Text::new(
                "Hand pollination increases fruit set",
                "হাতে পরাগায়ন করলে ফল বেশি হয়",
            ),
            Text::new(
                "Reduce nitrogen, increase phosphorus fertilizer",
                "নাইট্রোজেন কমান, ফসফরাস সার বাড়ান",
            ),
            Text::new(
                "Ensure adequate calcium for fruit development",
                "ফল বিকাশের জন্য পর্যাপ্ত ক্যালসিয়াম নিশ্চিত করুন",
            ),
            Text::new(
                "Protect flowers from strong winds and rain",
                "ফুলকে শক্তিশালী বাতাস ও বৃষ্টি থেকে রক্ষা করুন",
            ),
        ],
    },
    DragonFruitStage {
        id: "fruiting",
        name: Text::new("Fruit Development", "ফল বিকাশ"),
        duration: Text::new("30-50 days after flowering", "ফুল ফোটার ৩০-৫০ দিন পর"),
        description: Text::new(
            "Green fruits develop and gradually change color",
            "সবুজ ফল বিকশিত হয় এবং ধীরে ধীরে রং পরিবর্তন করে",
        ),
        care_tips: &[
            Text::new(
                "Support heavy fruits with nets or bags",
                "ভারী ফলগুলো জাল বা ব্যাগ দিয়ে সাপোর্ট দিন",
            ),
            Text::new(
                "Regular watering but avoid water on fruits",
                "নিয়মিত পানি দিন কিন্তু ফলে পানি লাগানো এড়িয়ে চলুন",
            ),
            Text::new("Apply potassium-rich fertilizer", "পটাশিয়াম সমৃদ্ধ সার প্রয়োগ করুন"),
            Text::new(
                "Remove damaged or deformed fruits",
                "ক্ষতিগ্রস্ত বা বিকৃত ফল সরিয়ে ফেলুন",
            ),
            Text::new(
                "Monitor fruit flies and other pests",
                "ফলের মাছি ও অন্যান্য পোকার জন্য নিয়মিত পর্যবেক্ষণ করুন",
            ),
        ],
    },
    DragonFruitStage {
        id: "harvest",
        name: Text::new("Harvest Time", "ফসল তোলার সময়"),
        duration: Text::new("When fruits turn red/pink", "ফল লাল/গোলাপী হলে"),
        description: Text::new(
            "Harvest when fruits are fully colored but still firm",
            "ফল পুরোপুরি রং হলে কিন্তু শক্ত থাকতেই তুলুন",
        ),
        care_tips: &[
            Text::new("Harvest in early morning or evening", "ভোর বেলা বা সন্ধ্যায় ফসল তুলুন"),
            Text::new(
                "Fruits should be firm with bright color",
                "ফল শক্ত ও উজ্জ্বল রঙের হতে হবে",
            ),
            Text::new(
                "Cut with sharp knife, leave small stem",
                "ধারালো ছুরি দিয়ে কাটুন, ছোট ডাঁটা রেখে দিন",
            ),
            Text::new(
                "Handle carefully to avoid bruising",
                "আঘাত এড়াতে সাবধানে হ্যান্ডেল করুন",
            ),
            Text::new(
                "Store in cool, dry place for 1-2 weeks",
                "ঠান্ডা, শুকনো জায়গায় ১-২ সপ্তাহ সংরক্ষণ করুন",
            ),
        ],
    },
];

pub static DRAGON_FRUIT_SOIL: SoilRequirement = SoilRequirement {
    soil_type: Text::new("Well-drained sandy loam", "ভালো নিষ্কাশনযুক্ত বালুকাময় দোআঁশ"),
    ph: "5.5 - 7.0 (slightly acidic to neutral)",
    drainage: Text::new(
        "Excellent drainage required - avoid waterlogged conditions",
        "চমৎকার নিষ্কাশন প্রয়োজন - জলাবদ্ধতা এড়িয়ে চলুন",
    ),
    nutrients: &[
        Text::new("Rich in organic matter", "জৈব পদার্থে সমৃদ্ধ"),
        Text::new("Good calcium content", "ভালো ক্যালসিয়ামের উপাদান"),
        Text::new("Adequate phosphorus and potassium", "পর্যাপ্ত ফসফরাস ও পটাশিয়াম"),
        Text::new("Low to moderate nitrogen", "কম থেকে মধ্যম নাইট্রোজেন"),
    ],
};

pub static DRAGON_FRUIT_PESTS_DISEASES: &[PestDisease] = &[
    PestDisease {
        id: "anthracnose",
        name: Text::new("Anthracnose", "অ্যানথ্রাকনোজ"),
        kind: PestDiseaseKind::Disease,
        symptoms: &[
            Text::new("Dark, sunken spots on fruits", "ফলে কালো, গর্তযুক্ত দাগ"),
            Text::new("Brown lesions on stems", "কাণ্ডে বাদামী ক্ষত"),
            Text::new("Premature fruit drop", "অকাল ফল ঝরা"),
        ],
        treatment: &[
            Text::new("Remove affected parts immediately", "আক্রান্ত অংশ তৎক্ষণাৎ সরিয়ে ফেলুন"),
            Text::new("Apply copper oxychloride spray", "কপার অক্সিক্লোরাইড স্প্রে করুন"),
            Text::new("Improve air circulation", "বায়ু চলাচল উন্নত করুন"),
            Text::new("Avoid overhead watering", "উপর থেকে পানি দেওয়া এড়িয়ে চলুন"),
        ],
        prevention: &[
            Text::new(
                "Plant in well-ventilated areas",
                "ভালো বায়ু চলাচলযুক্ত এলাকায় রোপণ করুন",
            ),
            Text::new(
                "Avoid water on leaves and fruits",
                "পাতা ও ফলে পানি লাগানো এড়িয়ে চলুন",
            ),
            Text::new(
                "Regular pruning for air circulation",
                "বায়ু চলাচলের জন্য নিয়মিত ছাঁটাই করুন",
            ),
            Text::new(
                "Use disease-free planting material",
                "রোগমুক্ত রোপণ উপাদান ব্যবহার করুন",
            ),
        ],
        pesticides: &[
            Text::new("Copper oxychloride", "কপার অক্সিক্লোরাইড"),
            Text::new("Carbendazim", "কার্বেন্ডাজিম"),
            Text::new("Mancozeb", "ম্যানকোজেব"),
        ],
    },
    PestDisease {
        id: "stem-canker",
        name: Text::new("Stem Canker", "কাণ্ড ক্যানকার"),
        kind: PestDiseaseKind::Disease,
        symptoms: &[
            Text::new("Sunken, dark lesions on stems", "কাণ্ডে গর্তযুক্ত, কালো ক্ষত"),
            Text::new(
                "Yellowing and wilting of branches",
                "ডালের হলদে হয়ে যাওয়া ও ঢলে পড়া",
            ),
            Text::new("Cracking and splitting of bark", "বাকল ফাটা ও চিড় ধরা"),
        ],
        treatment: &[
            Text::new("Cut and remove infected stems", "আক্রান্ত কাণ্ড কেটে সরিয়ে ফেলুন"),
            Text::new("Apply fungicide paste on wounds", "ক্ষতস্থানে ছত্রাকনাশক পেস্ট লাগান"),
            Text::new("Reduce watering frequency", "পানি দেওয়ার পরিমাণ কমান"),
            Text::new("Improve drainage around plants", "গাছের চারপাশে নিষ্কাশন উন্নত করুন"),
        ],
        prevention: &[
            Text::new("Avoid mechanical injuries", "যান্ত্রিক আঘাত এড়িয়ে চলুন"),
            Text::new("Ensure proper drainage", "সঠিক নিষ্কাশন নিশ্চিত করুন"),
            Text::new("Apply balanced fertilizer", "সুষম সার প্রয়োগ করুন"),
            Text::new("Regular inspection of stems", "কাণ্ডের নিয়মিত পরীক্ষা করুন"),
        ],
        pesticides: &[
            Text::new("Copper fungicide", "কপার ছত্রাকনাশক"),
            Text::new("Bordeaux mixture", "বোর্দো মিশ্রণ"),
        ],
    },
    PestDisease {
        id: "fruit-fly",
        name: Text::new("Fruit Fly", "ফলের মাছি"),
        kind: PestDiseaseKind::Pest,
        symptoms: &[
            Text::new("Small holes in ripe fruits", "পাকা ফলে ছোট ছিদ্র"),
            Text::new("Larvae inside fruits", "ফলের ভিতরে লার্ভা"),
            Text::new("Premature fruit drop", "অকাল ফল ঝরা"),
            Text::new("Rotting of infected fruits", "আক্রান্ত ফল পচে যাওয়া"),
        ],
        treatment: &[
            Text::new("Remove and destroy infected fruits", "আক্রান্ত ফল সরিয়ে ধ্বংস করুন"),
            Text::new("Use pheromone traps", "ফেরোমন ফাঁদ ব্যবহার করুন"),
            Text::new("Apply organic neem oil spray", "জৈব নিম তেল স্প্রে করুন"),
            Text::new("Harvest fruits slightly early", "ফল একটু তাড়াতাড়ি তুলুন"),
        ],
        prevention: &[
            Text::new("Cover developing fruits with bags", "বিকশিত ফল ব্যাগ দিয়ে ঢেকে দিন"),
            Text::new("Maintain garden cleanliness", "বাগানের পরিচ্ছন্নতা বজায় রাখুন"),
            Text::new(
                "Remove fallen fruits immediately",
                "ঝরে পড়া ফল তৎক্ষণাৎ সরিয়ে ফেলুন",
            ),
            Text::new("Use yellow sticky traps", "হলুদ আঠালো ফাঁদ ব্যবহার করুন"),
        ],
        pesticides: &[
            Text::new("Neem oil", "নিম তেল"),
            Text::new("Spinosad", "স্পিনোস্যাড"),
            Text::new(
                "Malathion (if organic methods fail)",
                "ম্যালাথিয়ন (জৈব পদ্ধতি ব্যর্থ হলে)",
            ),
        ],
    },
];

pub static FERTILIZER_SCHEDULE: &[FertilizerScheduleEntry] = &[
    FertilizerScheduleEntry {
        stage: Text::new("Planting", "রোপণ"),
        fertilizers: &[
            Text::new(
                "Well-decomposed cow dung (5-10 kg per plant)",
                "ভালোভাবে পচা গোবর (প্রতি গাছে ৫-১০ কেজি)",
            ),
            Text::new("Bone meal (200g per plant)", "হাড়ের গুঁড়া (প্রতি গাছে ২০০ গ্রাম)"),
        ],
    },
    FertilizerScheduleEntry {
        stage: Text::new("Growth Phase", "বৃদ্ধির পর্যায়"),
        fertilizers: &[
            Text::new("NPK 10:10:10 (100g per month)", "এনপিকে ১০:১০:১০ (মাসে ১০০ গ্রাম)"),
            Text::new(
                "Organic compost (2kg every 3 months)",
                "জৈব কম্পোস্ট (প্রতি ৩ মাসে ২ কেজি)",
            ),
        ],
    },
    FertilizerScheduleEntry {
        stage: Text::new("Flowering", "ফুল ফোটার সময়"),
        fertilizers: &[
            Text::new("High phosphorus fertilizer", "উচ্চ ফসফরাস সার"),
            Text::new("Calcium supplement", "ক্যালসিয়াম সাপ্লিমেন্ট"),
            Text::new("Reduce nitrogen", "নাইট্রোজেন কমান"),
        ],
    },
];

/// Short planting and care reminders shown at the end of the guide
pub static DRAGON_FRUIT_QUICK_TIPS: &[Text] = &[
    Text::new("Plant during rainy season", "বর্ষাকালে রোপণ করুন"),
    Text::new("Space plants 2-3 meters apart", "গাছে গাছে ২-৩ মিটার দূরত্ব রাখুন"),
    Text::new("Mulch around plants", "গাছের চারপাশে মালচ দিন"),
    Text::new("Regular pruning essential", "নিয়মিত ছাঁটাই অপরিহার্য"),
];
