// src/store/properties.rs
//
// The Record Store: an integer-keyed in-memory map of listings backed by
// one JSON file. Keys are assigned at generation time and survive
// save/load round-trips; serde_json handles the integer-to-string key
// conversion at the file boundary.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use crate::domain::listing::Listing;

pub struct PropertyStore {
    path: PathBuf,
    listings: BTreeMap<u32, Listing>,
}

impl PropertyStore {
    /// Opens a store against `path`, loading the file if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = PropertyStore {
            path: path.into(),
            listings: BTreeMap::new(),
        };
        store.load();
        store
    }

    /// Reads the backing file into memory. A missing file is not an error;
    /// an unreadable or malformed one is logged and leaves the current
    /// contents untouched.
    pub fn load(&mut self) {
        if !self.path.exists() {
            return;
        }

        let parsed = fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|data| {
                serde_json::from_str::<BTreeMap<u32, Listing>>(&data).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(listings) => {
                self.listings = listings;
                println!("Loaded {} properties from file.", self.listings.len());
            }
            Err(e) => eprintln!("Error loading properties: {e}"),
        }
    }

    /// Writes the current map to the backing file as pretty JSON,
    /// overwriting whatever is there. Failure is logged, never fatal.
    pub fn save(&self) {
        let written = File::create(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|file| {
                serde_json::to_writer_pretty(BufWriter::new(file), &self.listings)
                    .map_err(|e| e.to_string())
            });

        match written {
            Ok(()) => println!("Saved {} properties to file.", self.listings.len()),
            Err(e) => eprintln!("Error saving properties: {e}"),
        }
    }

    /// Replaces all contents with `count` fresh random listings keyed
    /// sequentially from 0, then persists immediately. Listings go straight
    /// into the map, so large counts need no intermediate buffer.
    pub fn generate(&mut self, count: usize) {
        let mut rng = rand::thread_rng();

        self.listings.clear();
        for index in 0..count {
            self.listings.insert(index as u32, Listing::random(&mut rng));
        }

        self.save();
    }

    /// All listings in key-ascending order, without their keys.
    pub fn get_all(&self) -> Vec<Listing> {
        self.listings.values().cloned().collect()
    }

    /// All listings paired with their store keys, key-ascending.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &Listing)> + '_ {
        self.listings.iter().map(|(key, listing)| (*key, listing))
    }

    /// Looks a listing up by its generation-time key, not by position in
    /// any filtered view.
    pub fn get(&self, index: u32) -> Option<&Listing> {
        self.listings.get(&index)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
