use log::debug;

use crate::api::{RecipeApi, RecipeData};
use crate::error::AppError;

/// Baseline serving count when the source data supplies none.
const DEFAULT_SERVINGS: u32 = 4;

/// Time heuristic: every 3 ingredients add 15 minutes.
const MINUTES_PER_BLOCK: u32 = 15;
const INGREDIENTS_PER_BLOCK: u32 = 3;

/// Unicode fraction glyphs substituted before tokenizing.
const UNICODE_FRACTIONS: [(char, &str); 5] = [
    ('\u{00BD}', " 1/2"), // ½
    ('\u{2153}', " 1/3"), // ⅓
    ('\u{2154}', " 2/3"), // ⅔
    ('\u{00BC}', " 1/4"), // ¼
    ('\u{00BE}', " 3/4"), // ¾
];

/// Recognized unit spellings and their normalized forms.
const UNITS: [(&str, &str); 23] = [
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tbsp", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("oz", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("tsp", "tsp"),
    ("cups", "cup"),
    ("cup", "cup"),
    ("pounds", "pound"),
    ("pound", "pound"),
    ("lbs", "pound"),
    ("lb", "pound"),
    ("grams", "g"),
    ("gram", "g"),
    ("g", "g"),
    ("kilograms", "kg"),
    ("kilogram", "kg"),
    ("kg", "kg"),
    ("ml", "ml"),
    ("l", "l"),
];

/// A parsed ingredient line.
///
/// `count` is `None` when the line carried no leading quantity; such
/// ingredients are skipped by servings rescaling.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// Direction of a servings adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    Inc,
    Dec,
}

/// A fully loaded recipe with derived fields.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub servings: u32,
    pub cook_time: u32,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Fetch a recipe by id and derive ingredients, cook time and servings.
    pub async fn fetch(api: &dyn RecipeApi, id: &str) -> Result<Recipe, AppError> {
        let data = api.recipe(id).await?;
        Ok(Recipe::from_data(data))
    }

    pub fn from_data(data: RecipeData) -> Recipe {
        let ingredients = parse_ingredients(&data.ingredients);
        let cook_time = calc_time(ingredients.len());
        let servings = calc_servings(data.servings);
        debug!(
            "recipe {}: {} ingredients, {} min, serves {}",
            data.id,
            ingredients.len(),
            cook_time,
            servings
        );

        Recipe {
            id: data.id,
            title: data.title,
            author: data.author,
            img: data.img,
            url: data.url,
            servings,
            cook_time,
            ingredients,
        }
    }

    /// Adjust servings by one and rescale every counted ingredient so that
    /// `count / servings` stays constant.
    ///
    /// Decreasing below 1 is a no-op; the controller only dispatches `Dec`
    /// when `servings > 1`, so the guard here is defensive.
    pub fn update_servings(&mut self, change: ServingsChange) {
        let new_servings = match change {
            ServingsChange::Inc => self.servings + 1,
            ServingsChange::Dec => self.servings.saturating_sub(1).max(1),
        };
        if new_servings == self.servings {
            return;
        }

        let ratio = f64::from(new_servings) / f64::from(self.servings);
        for ing in &mut self.ingredients {
            if let Some(count) = ing.count.as_mut() {
                *count *= ratio;
            }
        }
        self.servings = new_servings;
    }
}

/// Estimated cook time in minutes, a pure function of ingredient count.
fn calc_time(ingredient_count: usize) -> u32 {
    let n = ingredient_count as u32;
    n.div_ceil(INGREDIENTS_PER_BLOCK) * MINUTES_PER_BLOCK
}

fn calc_servings(from_source: Option<u32>) -> u32 {
    match from_source {
        Some(s) if s >= 1 => s,
        _ => DEFAULT_SERVINGS,
    }
}

/// Best-effort heuristic parser for raw ingredient lines.
///
/// Per line: substitute unicode fraction glyphs, tokenize on whitespace,
/// take leading numeric tokens as the count, normalize the next token
/// against the unit table, and keep the remainder as the ingredient name.
/// This is not a grammar; lines it cannot interpret keep their full text
/// as the name with no count and an empty unit.
pub fn parse_ingredients(raw_lines: &[String]) -> Vec<Ingredient> {
    raw_lines.iter().map(|line| parse_line(line)).collect()
}

fn parse_line(raw: &str) -> Ingredient {
    let mut line = raw.to_string();
    for (glyph, replacement) in UNICODE_FRACTIONS {
        if line.contains(glyph) {
            line = line.replace(glyph, replacement);
        }
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut rest = &tokens[..];

    let count = match rest.first().and_then(|t| parse_number(t)) {
        Some(first) => {
            rest = &rest[1..];
            // Mixed quantities like "1 1/2" combine the whole and the fraction
            match rest.first().and_then(|t| parse_fraction(t)) {
                Some(frac) => {
                    rest = &rest[1..];
                    Some(first + frac)
                }
                None => Some(first),
            }
        }
        None => None,
    };

    let unit = match rest.first().and_then(|t| normalize_unit(t)) {
        Some(unit) => {
            rest = &rest[1..];
            unit.to_string()
        }
        None => String::new(),
    };

    let ingredient = if unit.is_empty() && count.is_none() {
        // Nothing recognized: the whole line is the name
        raw.trim().to_string()
    } else {
        rest.join(" ")
    };

    Ingredient {
        count,
        unit,
        ingredient,
    }
}

fn parse_number(token: &str) -> Option<f64> {
    if let Some(frac) = parse_fraction(token) {
        return Some(frac);
    }
    token.parse::<f64>().ok().filter(|n| n.is_finite() && *n >= 0.0)
}

fn parse_fraction(token: &str) -> Option<f64> {
    let (num, den) = token.split_once('/')?;
    let num = num.parse::<f64>().ok()?;
    let den = den.parse::<f64>().ok()?;
    if den == 0.0 {
        return None;
    }
    Some(num / den)
}

fn normalize_unit(token: &str) -> Option<&'static str> {
    let lowered = token.to_lowercase();
    UNITS
        .iter()
        .find(|(spelling, _)| *spelling == lowered)
        .map(|(_, normalized)| *normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> Ingredient {
        parse_line(line)
    }

    #[test]
    fn test_parse_fraction_count() {
        let ing = parse_one("1/2 cup sugar");
        assert_eq!(ing.count, Some(0.5));
        assert_eq!(ing.unit, "cup");
        assert_eq!(ing.ingredient, "sugar");
    }

    #[test]
    fn test_parse_count_without_unit() {
        let ing = parse_one("2 large eggs");
        assert_eq!(ing.count, Some(2.0));
        assert_eq!(ing.unit, "");
        assert_eq!(ing.ingredient, "large eggs");
    }

    #[test]
    fn test_parse_no_count() {
        let ing = parse_one("salt to taste");
        assert_eq!(ing.count, None);
        assert_eq!(ing.unit, "");
        assert_eq!(ing.ingredient, "salt to taste");
    }

    #[test]
    fn test_parse_mixed_number() {
        let ing = parse_one("1 1/2 cups flour");
        assert_eq!(ing.count, Some(1.5));
        assert_eq!(ing.unit, "cup");
        assert_eq!(ing.ingredient, "flour");
    }

    #[test]
    fn test_parse_unicode_fraction() {
        let ing = parse_one("\u{00BD} tsp vanilla extract");
        assert_eq!(ing.count, Some(0.5));
        assert_eq!(ing.unit, "tsp");
        assert_eq!(ing.ingredient, "vanilla extract");
    }

    #[test]
    fn test_parse_plural_unit_normalized() {
        let ing = parse_one("3 tablespoons olive oil");
        assert_eq!(ing.count, Some(3.0));
        assert_eq!(ing.unit, "tbsp");
        assert_eq!(ing.ingredient, "olive oil");
    }

    #[test]
    fn test_parse_unit_without_count() {
        let ing = parse_one("cup chopped parsley");
        assert_eq!(ing.count, None);
        assert_eq!(ing.unit, "cup");
        assert_eq!(ing.ingredient, "chopped parsley");
    }

    #[test]
    fn test_calc_time_heuristic() {
        assert_eq!(calc_time(7), 45);
        assert_eq!(calc_time(3), 15);
        assert_eq!(calc_time(1), 15);
        assert_eq!(calc_time(0), 0);
    }

    #[test]
    fn test_calc_servings_default() {
        assert_eq!(calc_servings(None), 4);
        assert_eq!(calc_servings(Some(0)), 4);
        assert_eq!(calc_servings(Some(6)), 6);
    }

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "47746".to_string(),
            title: "Deep Dish Pizza".to_string(),
            author: "Closet Cooking".to_string(),
            img: String::new(),
            url: String::new(),
            servings: 4,
            cook_time: 45,
            ingredients: vec![
                Ingredient {
                    count: Some(2.0),
                    unit: "cup".to_string(),
                    ingredient: "flour".to_string(),
                },
                Ingredient {
                    count: None,
                    unit: String::new(),
                    ingredient: "salt to taste".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_update_servings_rescales() {
        let mut recipe = sample_recipe();
        recipe.update_servings(ServingsChange::Inc);

        assert_eq!(recipe.servings, 5);
        assert_eq!(recipe.ingredients[0].count, Some(2.5));
        // Uncounted ingredients stay untouched
        assert_eq!(recipe.ingredients[1].count, None);
    }

    #[test]
    fn test_update_servings_round_trip() {
        let mut recipe = sample_recipe();
        let original = recipe.ingredients[0].count.unwrap();

        for _ in 0..5 {
            recipe.update_servings(ServingsChange::Inc);
        }
        for _ in 0..5 {
            recipe.update_servings(ServingsChange::Dec);
        }

        assert_eq!(recipe.servings, 4);
        let back = recipe.ingredients[0].count.unwrap();
        assert!(((back - original) / original).abs() < 1e-9);
    }

    #[test]
    fn test_update_servings_floor_at_one() {
        let mut recipe = sample_recipe();
        recipe.servings = 1;
        let before = recipe.ingredients[0].count;

        recipe.update_servings(ServingsChange::Dec);

        assert_eq!(recipe.servings, 1);
        assert_eq!(recipe.ingredients[0].count, before);
    }
}
