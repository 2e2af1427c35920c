// fixtures/tables/boats.rs
//
// Dealership schema: boat types, boats, and reviews, plus a small fleet
// of sample rows clustered around the Chesapeake Bay. Fixed ids keep the
// seed idempotent and let tests reference known records.

use crate::fixtures::TestTable;

pub struct BoatsTable;

impl TestTable for BoatsTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            r#"
            CREATE TABLE IF NOT EXISTS boat_types (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL UNIQUE
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS boats (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                length DOUBLE PRECISION NOT NULL,
                price DECIMAL(12, 2) NOT NULL,
                picture VARCHAR(255) NOT NULL DEFAULT '',
                boat_type_id INTEGER NOT NULL REFERENCES boat_types(id),
                latitude DOUBLE PRECISION NOT NULL,
                longitude DOUBLE PRECISION NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id SERIAL PRIMARY KEY,
                boat_id INTEGER NOT NULL REFERENCES boats(id) ON DELETE CASCADE,
                subject VARCHAR(255) NOT NULL,
                comment TEXT NOT NULL DEFAULT '',
                rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
                reviewer VARCHAR(100) NOT NULL DEFAULT 'Anonymous',
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        ]
    }

    fn seed_sql() -> &'static [&'static str] {
        &[
            r#"
            INSERT INTO boat_types (id, name) VALUES
                (1, 'Sailboat'),
                (2, 'Fishing Boat'),
                (3, 'Pontoon'),
                (4, 'Yacht'),
                (5, 'Ski Boat')
            ON CONFLICT (id) DO NOTHING
            "#,
            r#"
            INSERT INTO boats
                (id, name, description, length, price, picture, boat_type_id, latitude, longitude)
            VALUES
                (1, 'Gallifrey Falls', 'Classic single-mast cruiser, fresh rigging.',
                 28.0, 85000.00, '/images/boats/sailboat1.png', 1, 36.8508, -75.9779),
                (2, 'Knot on Call', 'Center console with twin outboards.',
                 24.0, 67000.00, '/images/boats/fishing1.png', 2, 36.9312, -76.2397),
                (3, 'The Codfather', 'Offshore hull, rigged for deep water.',
                 31.0, 112000.00, '/images/boats/fishing2.png', 2, 37.0299, -76.3452),
                (4, 'Pier Pressure', 'Family pontoon with shade canopy.',
                 22.0, 41000.00, '/images/boats/pontoon1.png', 3, 36.8468, -76.2852),
                (5, 'Seas the Day', 'Flybridge yacht, two staterooms.',
                 48.0, 640000.00, '/images/boats/yacht1.png', 4, 36.8443, -75.9766),
                (6, 'Wake Me Up', 'Tow sports package, ballast tanks.',
                 21.0, 58000.00, '/images/boats/ski1.png', 5, 36.7682, -76.2875),
                (7, 'Gone with the Wind', 'Bluewater ketch, full keel.',
                 34.0, 98000.00, '/images/boats/sailboat2.png', 1, 37.0871, -76.4730),
                (8, 'Reel Therapy', 'Bay boat with shallow draft.',
                 23.0, 72000.00, '/images/boats/fishing3.png', 2, 36.9685, -76.4278),
                (9, 'Float Your Boat', 'Tritoon, upgraded stereo.',
                 25.0, 49000.00, '/images/boats/pontoon2.png', 3, 36.9137, -76.1910),
                (10, 'Liquid Asset', 'Sport yacht, hardtop, low hours.',
                 42.0, 520000.00, '/images/boats/yacht2.png', 4, 36.8355, -76.2983)
            ON CONFLICT (id) DO NOTHING
            "#,
            r#"
            INSERT INTO reviews (id, boat_id, subject, comment, rating, reviewer) VALUES
                (1, 1, 'Dream to sail', 'Points well upwind, tidy below decks.', 5, 'Harbor Hank'),
                (2, 1, 'Needs new sails', 'Hull is great but the main is tired.', 3, 'Salty Sue'),
                (3, 2, 'Fish magnet', 'Caught my limit the first weekend out.', 5, 'Reel Deal Neil'),
                (4, 5, 'Pure luxury', 'The staterooms are bigger than my flat.', 5, 'Marina Martin')
            ON CONFLICT (id) DO NOTHING
            "#,
            // SERIAL sequences must catch up with the fixed-id rows
            r#"
            SELECT setval('boat_types_id_seq', (SELECT MAX(id) FROM boat_types))
            "#,
            r#"
            SELECT setval('boats_id_seq', (SELECT MAX(id) FROM boats))
            "#,
            r#"
            SELECT setval('reviews_id_seq', (SELECT MAX(id) FROM reviews))
            "#,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_sql_creates_all_tables() {
        let sql = BoatsTable::setup_sql();
        assert_eq!(sql.len(), 3);
        assert!(sql[0].contains("boat_types"));
        assert!(sql[1].contains("boats"));
        assert!(sql[2].contains("reviews"));
        for statement in sql {
            assert!(statement.contains("IF NOT EXISTS"));
        }
    }

    #[test]
    fn test_seed_sql_is_idempotent() {
        let seeds: Vec<&str> = BoatsTable::seed_sql()
            .iter()
            .copied()
            .filter(|s| s.contains("INSERT"))
            .collect();
        assert_eq!(seeds.len(), 3);
        for statement in seeds {
            assert!(statement.contains("ON CONFLICT (id) DO NOTHING"));
        }
    }
}
