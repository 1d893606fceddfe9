// crates/crgeo-core/src/search.rs
use crate::common::{busiest, CatalogStats, Leader, LocationNames, Orphans, ProvinceSummary};
use crate::model::{Canton, Catalog, District, Location, Province};
use crate::traits::{CatalogSearch, NameMatch};
use std::collections::HashSet;

impl CatalogSearch for Catalog {
    fn cantons_by_province(&self, province_code: u32) -> Vec<&Canton> {
        self.cantons
            .iter()
            .filter(|c| c.province_code == province_code)
            .collect()
    }

    fn districts_by_canton(&self, canton_code: u32) -> Vec<&District> {
        self.districts
            .iter()
            .filter(|d| d.parent_canton_code == canton_code)
            .collect()
    }

    fn find_province(&self, code: u32) -> Option<&Province> {
        self.provinces.iter().find(|p| p.code == code)
    }

    fn find_canton(&self, code: u32) -> Option<&Canton> {
        self.cantons.iter().find(|c| c.code == code)
    }

    fn find_district(&self, code: u32) -> Option<&District> {
        self.districts.iter().find(|d| d.code == code)
    }

    fn location(&self, province: u32, canton: u32, district: u32) -> Option<Location<'_>> {
        let p = self.find_province(province)?;
        let c = self.find_canton(canton)?;
        let d = self.find_district(district)?;

        if c.province_code != p.code || d.parent_canton_code != c.code {
            return None;
        }

        Some(Location {
            province: p,
            canton: c,
            district: d,
        })
    }

    fn find_location_by_names(
        &self,
        province: &str,
        canton: &str,
        district: &str,
    ) -> Option<Location<'_>> {
        let p = self.provinces.iter().find(|p| p.name_contains(province))?;
        let c = self
            .cantons
            .iter()
            .find(|c| c.province_code == p.code && c.name_contains(canton))?;
        let d = self
            .districts
            .iter()
            .find(|d| d.parent_canton_code == c.code && d.name_contains(district))?;

        Some(Location {
            province: p,
            canton: c,
            district: d,
        })
    }

    fn location_names(&self, province: &str, canton: &str, district: &str) -> LocationNames {
        let mut names = LocationNames {
            province: province.to_string(),
            canton: canton.to_string(),
            district: district.to_string(),
        };

        let Some(p) = self
            .provinces
            .iter()
            .find(|p| p.code.to_string() == province.trim())
        else {
            return names;
        };
        names.province = p.name.clone();

        let Some(c) = self
            .cantons
            .iter()
            .find(|c| c.province_code == p.code && c.code.to_string() == canton.trim())
        else {
            return names;
        };
        names.canton = c.name.clone();

        if let Some(d) = self
            .districts
            .iter()
            .find(|d| d.parent_canton_code == c.code && d.code.to_string() == district.trim())
        {
            names.district = d.name.clone();
        }
        names
    }

    fn orphans(&self) -> Orphans<'_> {
        let provinces: HashSet<u32> = self.provinces.iter().map(|p| p.code).collect();
        let cantons: HashSet<u32> = self.cantons.iter().map(|c| c.code).collect();

        Orphans {
            cantons: self
                .cantons
                .iter()
                .filter(|c| !provinces.contains(&c.province_code))
                .collect(),
            districts: self
                .districts
                .iter()
                .filter(|d| !cantons.contains(&d.parent_canton_code))
                .collect(),
        }
    }

    fn stats(&self) -> CatalogStats {
        let province_with_most_cantons = busiest(self.cantons.iter().map(|c| c.province_code))
            .and_then(|(code, count)| {
                self.find_province(code).map(|p| Leader {
                    code,
                    name: p.name.clone(),
                    count,
                })
            });

        let canton_with_most_districts =
            busiest(self.districts.iter().map(|d| d.parent_canton_code)).and_then(
                |(code, count)| {
                    self.find_canton(code).map(|c| Leader {
                        code,
                        name: c.name.clone(),
                        count,
                    })
                },
            );

        CatalogStats {
            provinces: self.provinces.len(),
            cantons: self.cantons.len(),
            districts: self.districts.len(),
            province_with_most_cantons,
            canton_with_most_districts,
            total_area: self.districts.iter().map(|d| d.area).sum(),
        }
    }

    fn summary(&self) -> ProvinceSummary {
        ProvinceSummary::from_districts(&self.districts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            vec![Province::new(1, "San José"), Province::new(2, "Alajuela")],
            vec![
                Canton::new(101, "San José", 1),
                Canton::new(102, "Escazú", 1),
                Canton::new(202, "San Ramón", 2),
            ],
            vec![
                District::new(10101, "Carmen", 101, 1.49),
                District::new(10102, "Merced", 101, 2.2),
                District::new(10201, "Escazú", 102, 4.53),
                District::new(20201, "San Ramón", 202, 1.28),
                District::new(20208, "Ángeles", 202, 84.91),
                District::new(20209, "Alfaro", 202, 17.84),
            ],
        )
    }

    #[test]
    fn dependent_filters_keep_store_order() {
        let db = sample();
        let cantons: Vec<_> = db.cantons_by_province(1).iter().map(|c| c.code).collect();
        assert_eq!(cantons, [101, 102]);
        let districts: Vec<_> = db.districts_by_canton(202).iter().map(|d| d.code).collect();
        assert_eq!(districts, [20201, 20208, 20209]);
        assert!(db.districts_by_canton(999).is_empty());
    }

    #[test]
    fn location_requires_a_consistent_hierarchy() {
        let db = sample();
        let loc = db.location(2, 202, 20208).unwrap();
        assert_eq!(loc.district.name, "Ángeles");
        assert_eq!(db.format_location(2, 202, 20208).unwrap(), "Ángeles, San Ramón, Alajuela");

        // canton 202 is not in province 1
        assert!(db.location(1, 202, 20208).is_none());
        // district 10101 is not in canton 102
        assert!(!db.validate_location(1, 102, 10101));
        assert!(db.format_location(3, 301, 30101).is_none());
    }

    #[test]
    fn name_search_ignores_accents_and_case() {
        let db = sample();
        let loc = db.find_location_by_names("alajuela", "ramon", "angeles").unwrap();
        assert_eq!(loc.district.code, 20208);

        let loc = db.find_location_by_names("JOSE", "escazu", "").unwrap();
        assert_eq!(loc.district.code, 10201);

        assert!(db.find_location_by_names("cartago", "", "").is_none());
    }

    #[test]
    fn location_names_fall_back_per_tier() {
        let db = sample();
        let full = db.location_names("2", "202", "20209");
        assert_eq!(full.province, "Alajuela");
        assert_eq!(full.canton, "San Ramón");
        assert_eq!(full.district, "Alfaro");

        let partial = db.location_names("1", "101", "10199");
        assert_eq!(partial.canton, "San José");
        assert_eq!(partial.district, "10199");

        let none = db.location_names("9", "901", "90101");
        assert_eq!(none.province, "9");
        assert_eq!(none.canton, "901");
    }

    #[test]
    fn orphans_are_reported_not_removed() {
        let mut db = sample();
        db.cantons.push(Canton::new(801, "Nowhere", 8));
        db.districts.push(District::new(30101, "Oriental", 301, 2.28));

        let orphans = db.orphans();
        assert_eq!(orphans.len(), 2);
        assert_eq!(orphans.cantons[0].code, 801);
        assert_eq!(orphans.districts[0].code, 30101);
        assert_eq!(db.districts.len(), 7);
    }

    #[test]
    fn stats_pick_the_busiest_parents() {
        let stats = sample().stats();
        assert_eq!((stats.provinces, stats.cantons, stats.districts), (2, 3, 6));
        let p = stats.province_with_most_cantons.unwrap();
        assert_eq!((p.code, p.count), (1, 2));
        let c = stats.canton_with_most_districts.unwrap();
        assert_eq!((c.name.as_str(), c.count), ("San Ramón", 3));
        assert!((stats.total_area - 112.25).abs() < 1e-9);
    }

    #[test]
    fn stats_on_empty_catalog() {
        let stats = Catalog::default().stats();
        assert!(stats.province_with_most_cantons.is_none());
        assert_eq!(stats.total_area, 0.0);
    }
}
