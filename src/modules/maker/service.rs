use super::repository::{MakerProfile, UpsertMakerProfilePayload};
use crate::modules::{meal::repository::Meal, user::repository::User};
use itertools::Itertools;
use serde::Serialize;

const DEFAULT_NAME: &str = "Chef's Corner";
const DEFAULT_PHONE: &str = "+61 3 8652 1453";
const DEFAULT_COUNTRY: &str = "Australia";
const DEFAULT_LOCATION: &str = "Shop LGSS09, 99 Spencer St, Docklands VIC 3008";

/// Placeholder profile stored the first time a maker's profile is read.
pub fn default_profile(maker: &User) -> UpsertMakerProfilePayload {
    UpsertMakerProfilePayload {
        maker_id: maker.id,
        name: DEFAULT_NAME.to_string(),
        email: maker.email.clone(),
        phone: DEFAULT_PHONE.to_string(),
        country: DEFAULT_COUNTRY.to_string(),
        location: DEFAULT_LOCATION.to_string(),
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct MakerSummary {
    pub maker_id: i64,
    pub name: String,
    pub location: String,
    pub meal_count: usize,
    pub featured_meal_name: Option<String>,
    pub featured_meal_image: Option<String>,
}

/// The maker's most recently listed meal.
pub fn featured_meal(meals: &[Meal]) -> Option<&Meal> {
    meals.iter().max_by_key(|meal| (meal.created_at, meal.id))
}

pub fn summarize(profiles: Vec<MakerProfile>, meals: Vec<Meal>) -> Vec<MakerSummary> {
    let meals_by_maker = meals.into_iter().into_group_map_by(|meal| meal.maker_id);

    profiles
        .into_iter()
        .map(|profile| {
            let meals = meals_by_maker
                .get(&profile.maker_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let featured = featured_meal(meals);

            MakerSummary {
                maker_id: profile.maker_id,
                name: profile.name,
                location: profile.location,
                meal_count: meals.len(),
                featured_meal_name: featured.map(|meal| meal.title.clone()),
                featured_meal_image: featured.map(|meal| meal.image_data.clone()),
            }
        })
        .collect()
}
