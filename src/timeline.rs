//! Growth timelines for the featured crops.
//!
//! Static stage-by-stage guides for rice, maize and cotton. Days count from
//! sowing, start at 1, and each stage's range is inclusive.

use serde::Serialize;

use crate::types::Crop;

/// One stage of a crop's growth cycle.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct GrowthStage {
    pub name: &'static str,
    /// First day of the stage, counted from sowing.
    pub start_day: u16,
    /// Last day of the stage, inclusive.
    pub end_day: u16,
    pub description: &'static str,
    pub tasks: &'static [&'static str],
    pub tip: &'static str,
}

impl GrowthStage {
    pub fn contains_day(&self, day: u16) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }

    /// Stage length in days.
    pub fn duration_days(&self) -> u16 {
        self.end_day - self.start_day + 1
    }
}

/// The full growth cycle of a crop.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct GrowthTimeline {
    pub crop: Crop,
    pub stages: &'static [GrowthStage],
}

impl GrowthTimeline {
    /// Stage the crop is in on `day`, or `None` before sowing or after harvest.
    pub fn stage_on_day(&self, day: u16) -> Option<&'static GrowthStage> {
        self.stages.iter().find(|stage| stage.contains_day(day))
    }

    /// Days from sowing to the end of harvest.
    pub fn total_days(&self) -> u16 {
        self.stages.last().map_or(0, |stage| stage.end_day)
    }
}

/// Timeline for `crop`, if one is published.
pub fn for_crop(crop: Crop) -> Option<&'static GrowthTimeline> {
    TIMELINES.iter().find(|timeline| timeline.crop == crop)
}

/// Every published timeline.
pub fn all() -> &'static [GrowthTimeline] {
    &TIMELINES
}

static TIMELINES: [GrowthTimeline; 3] = [
    GrowthTimeline {
        crop: Crop::Rice,
        stages: &RICE,
    },
    GrowthTimeline {
        crop: Crop::Maize,
        stages: &MAIZE,
    },
    GrowthTimeline {
        crop: Crop::Cotton,
        stages: &COTTON,
    },
];

static RICE: [GrowthStage; 6] = [
    GrowthStage {
        name: "Seed Preparation",
        start_day: 1,
        end_day: 7,
        description: "Soak seeds for 24 hours, then drain and incubate for 1-2 days until germination begins.",
        tasks: &["Seed selection", "Soaking", "Pre-germination"],
        tip: "Use high-quality seeds with at least 80% germination rate for best results.",
    },
    GrowthStage {
        name: "Seedling Stage",
        start_day: 8,
        end_day: 20,
        description: "Transplant seedlings to the main field when they have 3-4 leaves.",
        tasks: &["Prepare nursery bed", "Sow pre-germinated seeds", "Water management"],
        tip: "Maintain 2-3 cm water level in the nursery bed.",
    },
    GrowthStage {
        name: "Vegetative Stage",
        start_day: 21,
        end_day: 60,
        description: "Plants develop tillers and grow in height. This is a critical period for nutrient uptake.",
        tasks: &["Weed control", "Water management", "Fertilizer application"],
        tip: "Apply nitrogen fertilizer in split doses to maximize efficiency.",
    },
    GrowthStage {
        name: "Reproductive Stage",
        start_day: 61,
        end_day: 90,
        description: "Plants develop panicles and flowers. Ensure adequate water and nutrients during this period.",
        tasks: &["Pest monitoring", "Disease control", "Maintain water level"],
        tip: "Keep fields flooded with 5-7 cm of water during this stage.",
    },
    GrowthStage {
        name: "Ripening Stage",
        start_day: 91,
        end_day: 120,
        description: "Grains fill and mature, changing from green to golden yellow.",
        tasks: &["Drain field", "Monitor maturity", "Prepare for harvest"],
        tip: "Drain fields 7-10 days before expected harvest date.",
    },
    GrowthStage {
        name: "Harvest",
        start_day: 121,
        end_day: 130,
        description: "Cut and thresh the mature rice plants when 80-85% of the grains are golden yellow.",
        tasks: &["Harvesting", "Threshing", "Drying", "Storage"],
        tip: "Harvest in the morning to avoid grain shattering in the heat of the day.",
    },
];

static MAIZE: [GrowthStage; 7] = [
    GrowthStage {
        name: "Seed Germination",
        start_day: 1,
        end_day: 10,
        description: "Seeds germinate and emerge from the soil, developing initial root system.",
        tasks: &["Soil preparation", "Seed planting", "Initial irrigation"],
        tip: "Plant seeds at a depth of 3-5 cm in warm, moist soil.",
    },
    GrowthStage {
        name: "Seedling Stage",
        start_day: 11,
        end_day: 30,
        description: "Young plants develop their first true leaves and establish root systems.",
        tasks: &["Thinning", "Weed control", "Light fertilization"],
        tip: "Thin seedlings to maintain 20-25 cm spacing between plants.",
    },
    GrowthStage {
        name: "Vegetative Stage",
        start_day: 31,
        end_day: 60,
        description: "Rapid growth of stems and leaves. Critical period for water and nutrient uptake.",
        tasks: &["Fertilizer application", "Irrigation", "Pest monitoring"],
        tip: "Apply nitrogen fertilizer when plants are knee-high.",
    },
    GrowthStage {
        name: "Tasseling Stage",
        start_day: 61,
        end_day: 70,
        description: "Male flowers (tassels) appear at the top of the plant, releasing pollen.",
        tasks: &["Irrigation", "Disease monitoring", "Supplemental fertilization"],
        tip: "Ensure adequate soil moisture during this critical reproductive stage.",
    },
    GrowthStage {
        name: "Silking & Pollination",
        start_day: 71,
        end_day: 90,
        description: "Female flowers (silks) emerge from ear shoots and capture pollen for fertilization.",
        tasks: &["Maintain soil moisture", "Pest control", "Avoid disturbance"],
        tip: "Water stress during this period can significantly reduce yield.",
    },
    GrowthStage {
        name: "Grain Fill & Maturity",
        start_day: 91,
        end_day: 120,
        description: "Kernels develop and mature, changing from milky to dent stage.",
        tasks: &["Irrigation management", "Disease monitoring", "Prepare for harvest"],
        tip: "Kernels are mature when they develop a black layer at the base.",
    },
    GrowthStage {
        name: "Harvest",
        start_day: 121,
        end_day: 140,
        description: "Harvest when kernels are hard and moisture content is around 15-20%.",
        tasks: &["Harvesting", "Drying", "Storage"],
        tip: "Dry harvested corn to 13-14% moisture for safe storage.",
    },
];

static COTTON: [GrowthStage; 7] = [
    GrowthStage {
        name: "Planting & Germination",
        start_day: 1,
        end_day: 10,
        description: "Seeds germinate and seedlings emerge from the soil.",
        tasks: &["Soil preparation", "Seed planting", "Initial irrigation"],
        tip: "Plant when soil temperature is at least 18°C at 10 cm depth.",
    },
    GrowthStage {
        name: "Seedling Establishment",
        start_day: 11,
        end_day: 30,
        description: "Young plants develop true leaves and establish root systems.",
        tasks: &["Thinning", "Weed control", "Pest monitoring"],
        tip: "Thin seedlings to maintain 10-15 cm spacing between plants.",
    },
    GrowthStage {
        name: "Vegetative Growth",
        start_day: 31,
        end_day: 60,
        description: "Plants develop branches, leaves, and grow in height.",
        tasks: &["Fertilizer application", "Irrigation", "Pest control"],
        tip: "Apply nitrogen fertilizer to promote vegetative growth.",
    },
    GrowthStage {
        name: "Flowering",
        start_day: 61,
        end_day: 90,
        description: "Plants produce flower buds (squares) that develop into flowers.",
        tasks: &["Irrigation management", "Pest monitoring", "Nutrient management"],
        tip: "Monitor for boll weevils and other pests that target flower buds.",
    },
    GrowthStage {
        name: "Boll Development",
        start_day: 91,
        end_day: 140,
        description: "Fertilized flowers develop into bolls that contain seeds and fibers.",
        tasks: &["Irrigation", "Disease control", "Nutrient management"],
        tip: "Maintain consistent soil moisture to prevent boll shedding.",
    },
    GrowthStage {
        name: "Boll Opening & Maturity",
        start_day: 141,
        end_day: 170,
        description: "Bolls mature and split open, exposing the cotton fibers.",
        tasks: &["Irrigation reduction", "Defoliation planning", "Harvest preparation"],
        tip: "Reduce irrigation to encourage boll opening and prevent regrowth.",
    },
    GrowthStage {
        name: "Harvest",
        start_day: 171,
        end_day: 180,
        description: "Harvest when 60-70% of bolls are open and fibers are dry.",
        tasks: &["Defoliation", "Harvesting", "Module building", "Ginning"],
        tip: "Apply defoliants 7-14 days before planned harvest date.",
    },
];
