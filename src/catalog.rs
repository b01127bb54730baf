//! The fixed crop table.
//!
//! One display record per [`Crop`], in class-id order. The table is a
//! `static`, so it exists for the whole process and is never mutated.

use crate::types::{Crop, CropRecord};

const IMAGE_BASE: &str = "https://ik.imagekit.io/yci3efhum/soil_pred_crops_picture";

macro_rules! record {
    ($crop:ident, $file:literal, $updated:literal) => {
        CropRecord {
            crop: Crop::$crop,
            name: stringify!($crop),
            image: concat!(
                "https://ik.imagekit.io/yci3efhum/soil_pred_crops_picture/",
                $file,
                "?updatedAt=",
                $updated
            ),
        }
    };
}

static CATALOG: [CropRecord; 22] = [
    record!(Rice, "rice.jpg", "1743067640518"),
    record!(Maize, "maize.jpg", "1743067634479"),
    record!(Jute, "jute.jpg", "1743067628781"),
    record!(Cotton, "cotton.jpg", "1743067629429"),
    record!(Coconut, "coconut.jpg", "1743067645258"),
    record!(Papaya, "papaya.jpg", "1743068191793"),
    record!(Orange, "orange.jpg", "1743067645590"),
    record!(Apple, "apple.jpg", "1743067636564"),
    record!(Muskmelon, "muskmelon.jpg", "1743068259477"),
    record!(Watermelon, "watermelon.jpg", "1743067642928"),
    record!(Grapes, "grapes.jpg", "1743068358624"),
    record!(Mango, "mango.jpg", "1743067635232"),
    record!(Banana, "banana.jpg", "1743067628336"),
    record!(Pomegranate, "Pomegranate.jpg", "1743067640232"),
    record!(Lentil, "lentils.jpg", "1743067631051"),
    record!(Blackgram, "blackgram.jpg", "1743067629702"),
    record!(Mungbean, "munggram.jpg", "1743067654488"),
    record!(Mothbeans, "moth%20beans.jpg", "1743067653408"),
    record!(Pigeonpeas, "Pigeonpeas.jpg", "1743068460685"),
    record!(Kidneybeans, "Kidneybeans.jpg", "1743067628986"),
    record!(Chickpea, "chickpeas.jpg", "1743068569806"),
    record!(Coffee, "coffee.jpg", "1743067628992"),
];

/// Every record, in class-id order.
pub fn all() -> &'static [CropRecord] {
    &CATALOG
}

/// Number of known crops.
pub fn len() -> usize {
    CATALOG.len()
}

/// The record for a crop.
pub fn get(crop: Crop) -> &'static CropRecord {
    // Discriminants start at 1 and follow table order.
    &CATALOG[usize::from(crop.class_id()) - 1]
}

/// Find a record by name, ignoring ASCII case and surrounding whitespace.
pub fn lookup(name: &str) -> Option<&'static CropRecord> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|record| record.name.eq_ignore_ascii_case(name))
}

/// Base URL every image lives under.
pub fn image_base() -> &'static str {
    IMAGE_BASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_follows_class_id_order() {
        for (index, record) in all().iter().enumerate() {
            assert_eq!(usize::from(record.crop.class_id()), index + 1);
            assert_eq!(get(record.crop), record);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), len());
    }

    #[test]
    fn images_share_base() {
        assert!(all().iter().all(|r| r.image.starts_with(image_base())));
        assert_eq!(
            get(Crop::Mothbeans).image,
            "https://ik.imagekit.io/yci3efhum/soil_pred_crops_picture/moth%20beans.jpg?updatedAt=1743067653408"
        );
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("kidneybeans").map(|r| r.crop), Some(Crop::Kidneybeans));
        assert_eq!(lookup(" RICE ").map(|r| r.crop), Some(Crop::Rice));
        assert!(lookup("Unknown Crop").is_none());
    }
}
