//! Built-in demo catalog.

use crate::catalog::{
    DecantInfo, FragranceNote, NoteTier, Product, ProductCategory as C, ProductGender as G,
    ProductType as T,
};
use crate::money::Money;

// 2024-01-01T00:00:00Z
const BASE_TS: i64 = 1_704_067_200;
const DAY: i64 = 86_400;

fn note(id: &str, name: &str, tier: NoteTier, family: &str) -> FragranceNote {
    FragranceNote::new(id, name, tier, family)
}

fn decant(bottle: &str, batch: &str, ts: i64) -> DecantInfo {
    DecantInfo {
        original_bottle: bottle.to_string(),
        decant_date: ts,
        batch_number: batch.to_string(),
        authenticity: true,
    }
}

pub(crate) fn sample_products() -> Vec<Product> {
    let mut reflection = Product::new("1", "Amouage", "Reflection Man", Money::eur(2800))
        .with_description("Ein unisex-Luxusduft mit Moschus & Sandelholz")
        .with_classification(C::EauDeParfum, T::Decant, G::Unisex)
        .with_availability(5)
        .with_rating(4.8, 23)
        .with_note(note("1", "Moschus", NoteTier::Base, "animalisch"))
        .with_note(note("2", "Sandelholz", NoteTier::Base, "holz"))
        .created_at(BASE_TS + 250 * DAY);
    reflection.short_description = "Unisex-Luxusduft mit Moschus & Sandelholz".to_string();
    reflection.concentration = "Eau de Parfum".to_string();
    reflection.volume = "10ml".to_string();
    reflection.is_limited = true;
    reflection.is_new = true;
    reflection.decant_info = Some(decant(
        "Amouage Reflection Man 100ml",
        "AO-2024-001",
        BASE_TS + 249 * DAY,
    ));

    let mut tobacco = Product::new("2", "Tom Ford", "Tobacco Vanille", Money::eur(3200))
        .with_description("Ein warmer, süßer Duft mit Tabak und Vanille")
        .with_classification(C::EauDeParfum, T::Decant, G::Unisex)
        .with_availability(3)
        .with_rating(4.9, 45)
        .with_note(note("3", "Tabak", NoteTier::Heart, "tabak"))
        .with_note(note("4", "Vanille", NoteTier::Base, "gourmand"))
        .created_at(BASE_TS + 120 * DAY);
    tobacco.short_description = "Warmer, süßer Duft mit Tabak und Vanille".to_string();
    tobacco.concentration = "Eau de Parfum".to_string();
    tobacco.volume = "10ml".to_string();
    tobacco.is_limited = true;
    tobacco.is_exclusive = true;
    tobacco.decant_info = Some(decant(
        "Tom Ford Tobacco Vanille 50ml",
        "AO-2024-002",
        BASE_TS + 119 * DAY,
    ));

    let mut baccarat = Product::new(
        "3",
        "Maison Francis Kurkdjian",
        "Baccarat Rouge 540",
        Money::eur(4500),
    )
    .with_description("Leuchtender Amber mit Safran und Zedernholz")
    .with_classification(C::Parfum, T::Decant, G::Unisex)
    .with_availability(12)
    .with_rating(4.7, 112)
    .with_note(note("5", "Safran", NoteTier::Top, "würzig"))
    .with_note(note("6", "Zedernholz", NoteTier::Base, "holz"))
    .created_at(BASE_TS + 240 * DAY);
    baccarat.concentration = "Extrait de Parfum".to_string();
    baccarat.volume = "5ml".to_string();
    baccarat.is_new = true;

    let mut aventus = Product::new("4", "Creed", "Aventus", Money::eur(28900))
        .with_description("Fruchtig-rauchiger Klassiker mit Ananas und Birke")
        .with_classification(C::EauDeParfum, T::Original, G::Masculine)
        .with_availability(2)
        .with_rating(4.6, 210)
        .with_original_price(Money::eur(32000))
        .with_note(note("7", "Ananas", NoteTier::Top, "fruchtig"))
        .with_note(note("8", "Birke", NoteTier::Heart, "rauchig"))
        .created_at(BASE_TS + 30 * DAY);
    aventus.concentration = "Eau de Parfum".to_string();
    aventus.volume = "100ml".to_string();
    aventus.is_exclusive = true;
    aventus.is_on_sale = true;

    let mut black_opium = Product::new("5", "Yves Saint Laurent", "Black Opium", Money::eur(9800))
        .with_description("Kaffee, weiße Blüten und Vanille")
        .with_classification(C::EauDeParfum, T::Original, G::Feminine)
        .with_availability(0)
        .with_rating(4.4, 87)
        .with_note(note("9", "Kaffee", NoteTier::Top, "gourmand"))
        .with_note(note("4", "Vanille", NoteTier::Base, "gourmand"))
        .created_at(BASE_TS + 60 * DAY);
    black_opium.concentration = "Eau de Parfum".to_string();
    black_opium.volume = "90ml".to_string();

    let mut acqua = Product::new("6", "Giorgio Armani", "Acqua di Giò", Money::eur(1400))
        .with_description("Frische aquatische Zitrusnoten")
        .with_classification(C::EauDeToilette, T::Decant, G::Masculine)
        .with_availability(25)
        .with_rating(4.3, 160)
        .with_note(note("10", "Bergamotte", NoteTier::Top, "zitrus"))
        .created_at(BASE_TS + 10 * DAY);
    acqua.concentration = "Eau de Toilette".to_string();
    acqua.volume = "10ml".to_string();

    let mut oud_silk = Product::new(
        "7",
        "Maison Francis Kurkdjian",
        "Oud Silk Mood",
        Money::eur(3900),
    )
    .with_description("Seidiges Oud mit bulgarischer Rose")
    .with_classification(C::Parfum, T::Decant, G::Unisex)
    .with_availability(4)
    .with_rating(4.8, 31)
    .with_note(note("11", "Oud", NoteTier::Base, "holz"))
    .with_note(note("12", "Rose", NoteTier::Heart, "blumig"))
    .created_at(BASE_TS + 255 * DAY);
    oud_silk.concentration = "Extrait de Parfum".to_string();
    oud_silk.volume = "5ml".to_string();
    oud_silk.is_limited = true;
    oud_silk.is_exclusive = true;
    oud_silk.is_new = true;

    let mut santal = Product::new("8", "Le Labo", "Santal 33", Money::eur(21500))
        .with_description("Sandelholz, Kardamom und Leder")
        .with_classification(C::EauDeParfum, T::Original, G::Unisex)
        .with_availability(8)
        .with_rating(4.5, 140)
        .with_note(note("2", "Sandelholz", NoteTier::Base, "holz"))
        .with_note(note("13", "Leder", NoteTier::Heart, "animalisch"))
        .created_at(BASE_TS + 90 * DAY);
    santal.concentration = "Eau de Parfum".to_string();
    santal.volume = "100ml".to_string();

    let mut musk_oil = Product::new("9", "Kiehl's", "Original Musk Oil", Money::eur(2400))
        .with_description("Sinnliches Moschusöl mit Rose und Neroli")
        .with_classification(C::Oil, T::Original, G::Feminine)
        .with_availability(15)
        .with_rating(4.2, 19)
        .with_note(note("1", "Moschus", NoteTier::Base, "animalisch"))
        .created_at(BASE_TS + 150 * DAY);
    musk_oil.concentration = "Parfum Oil".to_string();
    musk_oil.volume = "15ml".to_string();

    vec![
        reflection,
        tobacco,
        baccarat,
        aventus,
        black_opium,
        acqua,
        oud_silk,
        santal,
        musk_oil,
    ]
}
