// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// This file has comments, but none of them are documentation comments.
    // not a doc comment

// ------------------------------------------------------------------------------------
// Banner
// ------------------------------------------------------------------------------------

fn main() {
    let url = "https://example.com/path"; /// trailing text after code is not a doc comment line
    println!("{url}");
}
