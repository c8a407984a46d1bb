use super::*;

// =============================================================
// Wire format
// =============================================================

#[test]
fn car_listing_deserializes_from_camel_case() {
    let json = r#"{
        "name": "Audi S3",
        "mileage": "10k",
        "thumbnailUrl": "https://cars.example/s3.jpg",
        "dailyPrice": 70,
        "monthlyPrice": 1600,
        "gearType": "Auto",
        "fuelType": "Petrol"
    }"#;
    let car: CarListing = serde_json::from_str(json).unwrap();
    assert_eq!(car.name, "Audi S3");
    assert_eq!(car.mileage, "10k");
    assert_eq!(car.thumbnail_url, "https://cars.example/s3.jpg");
    assert!((car.daily_price - 70.0).abs() < f64::EPSILON);
    assert!((car.monthly_price - 1600.0).abs() < f64::EPSILON);
    assert_eq!(car.gear_type, GearType::Auto);
    assert_eq!(car.fuel_type, "Petrol");
}

#[test]
fn batch_preserves_response_order() {
    let json = r#"[
        {"name":"b","mileage":"1k","thumbnailUrl":"u","dailyPrice":1,
         "monthlyPrice":10,"gearType":"Manual","fuelType":"Diesel"},
        {"name":"a","mileage":"2k","thumbnailUrl":"u","dailyPrice":2,
         "monthlyPrice":20,"gearType":"Auto","fuelType":"Petrol"}
    ]"#;
    let batch: Vec<CarListing> = serde_json::from_str(json).unwrap();
    let names: Vec<_> = batch.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["b", "a"]);
}

// =============================================================
// GearType
// =============================================================

#[test]
fn known_gear_types_round_trip() {
    assert_eq!(
        serde_json::from_str::<GearType>("\"Auto\"").unwrap(),
        GearType::Auto
    );
    assert_eq!(
        serde_json::from_str::<GearType>("\"Manual\"").unwrap(),
        GearType::Manual
    );
    assert_eq!(serde_json::to_string(&GearType::Manual).unwrap(), "\"Manual\"");
}

#[test]
fn unknown_gear_type_maps_to_other() {
    let gear: GearType = serde_json::from_str("\"Tiptronic\"").unwrap();
    assert_eq!(gear, GearType::Other);
    assert_eq!(gear.label(), "Other");
}
