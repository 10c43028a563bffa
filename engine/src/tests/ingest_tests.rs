#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read, Write};

    use crate::config::EngineConfig;
    use crate::engine::Inventory;
    use crate::error::Error;
    use crate::ingest::csv::CsvOptions;
    use crate::ingest::{LoadReport, load_path, load_reader};

    const DATASET: &str = "\
uniq_id,product_name,category,price
A1,Widget,Tools,9.99
A2,Gadget,,19.99
A3,\"Cable, USB\",Electronics,4.50
B1,Short,Row

,Nameless,Tools,1.00
";

    #[test]
    fn test_load_end_to_end() {
        let mut inventory = Inventory::default();
        let report = load_reader(DATASET.as_bytes(), &CsvOptions::default(), &mut inventory)
            .expect("load should succeed");

        assert_eq!(
            report,
            LoadReport {
                loaded: 3,
                skipped: 2
            }
        );

        let widget = inventory.find("A1").expect("A1 should be loaded");
        assert_eq!(widget.name, "Widget");
        assert_eq!(widget.category, "Tools");

        let gadget = inventory.find("A2").expect("A2 should be loaded");
        assert_eq!(gadget.name, "Gadget");
        assert_eq!(gadget.category, "NA");

        let unnamed = inventory.list_category("NA").expect("NA should exist");
        assert_eq!(unnamed.len(), 1);
        assert_eq!(unnamed[0].id, "A2");

        assert_eq!(inventory.find("A3").map(|r| r.name.as_str()), Some("Cable, USB"));
        assert!(inventory.find("B1").is_none());
        assert!(inventory.find("uniq_id").is_none());
    }

    #[test]
    fn test_short_row_has_no_effect() {
        let mut inventory = Inventory::default();
        load_reader(
            "id,name,category,price\nA1,Widget,Tools,9.99\n".as_bytes(),
            &CsvOptions::default(),
            &mut inventory,
        )
        .unwrap();
        let (products, categories) = (inventory.len(), inventory.category_count());

        let report = load_reader(
            "id,name,category,price\nB1,Short,Row\n".as_bytes(),
            &CsvOptions::default(),
            &mut inventory,
        )
        .unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(inventory.len(), products);
        assert_eq!(inventory.category_count(), categories);
    }

    #[test]
    fn test_crlf_and_invalid_utf8() {
        let mut bytes = b"id,name,category,price\r\nA1,Widget,Tools,9.99\r\nA2,Caf".to_vec();
        bytes.extend_from_slice(&[0xE9]);
        bytes.extend_from_slice(b",Kitchen,3.00\r\n");

        let mut inventory = Inventory::default();
        let report = load_reader(bytes.as_slice(), &CsvOptions::default(), &mut inventory).unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(inventory.find("A1").map(|r| r.price.as_str()), Some("9.99"));
        assert!(inventory.list_category("Kitchen").is_some());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let mut inventory = Inventory::default();
        let report = load_path(file.path(), &mut inventory).unwrap();

        assert_eq!(report.loaded, 3);
        assert_eq!(inventory.category_count(), 3);
    }

    #[test]
    fn test_missing_file_leaves_inventory_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut inventory = Inventory::default();

        let result = load_path(dir.path().join("missing.csv"), &mut inventory);

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(inventory.is_empty());
        assert!(inventory.list_category("Tools").is_none());
    }

    struct BrokenSource;

    impl Read for BrokenSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk went away"))
        }
    }

    #[test]
    fn test_read_error_keeps_rows_already_loaded() {
        let head = "id,name,category,price\nA1,Widget,Tools,9.99\nA2,Gadget,,19.99\n";
        let reader = BufReader::new(head.as_bytes().chain(BrokenSource));

        let mut inventory = Inventory::default();
        let report = load_reader(reader, &CsvOptions::default(), &mut inventory)
            .expect("rows before the read error should still count as a load");

        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 0);
        assert!(inventory.find("A1").is_some());
        assert_eq!(inventory.list_category("NA").map(|b| b.len()), Some(1));
    }

    #[test]
    fn test_longest_chain_reflects_bucket_count() {
        let config = EngineConfig {
            bucket_count: 1,
            ..EngineConfig::default()
        };
        let mut inventory = Inventory::new(&config);
        load_reader(DATASET.as_bytes(), &CsvOptions::default(), &mut inventory).unwrap();

        // One bucket holds every distinct id.
        assert_eq!(inventory.longest_chain(), inventory.len());
        assert_eq!(Inventory::default().longest_chain(), 0);
    }
}
