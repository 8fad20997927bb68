use std::net::{IpAddr, Ipv4Addr};

use serde::Serialize;

///A word as stored in the index; case is preserved
pub type Word = String;

///The anagram key: the lowercased characters of a word, sorted by code point.
///All words that are anagrams of each other share the same key
pub type AnagramKey = String;

///Port the HTTP service listens on when none is given
pub const DEFAULT_PORT: u16 = 8080;

///Address the HTTP service binds to when none is given
pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

///Bulk inserts at least this large derive their keys in parallel
pub const PARALLEL_THRESHOLD: usize = 1024;

///A point-in-time summary of the index
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq,Serialize)]
pub struct IndexStats {
    ///Number of anagram groups (distinct keys)
    pub groups: usize,
    ///Total number of words over all groups
    pub words: usize,
}
