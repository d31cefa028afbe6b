#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

peg::parser! {
    /// Grammar for the compact location-range strings graded units use to
    /// claim source regions.
    pub grammar parser() for str {
        /// matches any sequence of 1 or more numbers
        rule number() -> u32
            = n:$(['0'..='9']+) {? n.parse().or(Err("u32")) }

        /// matches the file-substring half of a location range, which may be
        /// any non-empty sequence of characters other than `:`
        rule file_name() -> String
            = w:[^':']+
            { w.iter().collect::<String>() }

        /// parses a line spec, either a single line (`10`) or an inclusive
        /// interval (`10-20`)
        pub rule line_spec() -> (u32, u32)
            = start:number() "-" end:number() { (start, end) }
            / line:number() { (line, line) }

        /// parses a full location range (`foo.ts:10` or `foo.ts:10-20`)
        pub rule location_range() -> (String, u32, u32)
            = f:file_name() ":" lines:line_spec()
            {
                let (start, end) = lines;
                (f, start, end)
            }
    }
}
