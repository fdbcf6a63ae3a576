//! Plain field copies between the stored row and the business view.

use models::soda;

use super::domain::Soda;

impl From<soda::Model> for Soda {
    fn from(m: soda::Model) -> Self {
        Soda { id: m.id, name: m.name, brand: m.brand, max: m.max, quantity: m.quantity, soda_type: m.soda_type }
    }
}

impl From<Soda> for soda::Model {
    fn from(s: Soda) -> Self {
        soda::Model { id: s.id, name: s.name, brand: s.brand, soda_type: s.soda_type, quantity: s.quantity, max: s.max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::soda::SodaType;

    #[test]
    fn copies_every_field() {
        let row = soda::Model { id: 7, name: "Tubaina".into(), brand: "Ferraspari".into(), soda_type: SodaType::Weiss, quantity: 3, max: 9 };
        let dto = Soda::from(row.clone());
        assert_eq!(dto.id, 7);
        assert_eq!(dto.soda_type, SodaType::Weiss);
        assert_eq!(soda::Model::from(dto), row);
    }
}
