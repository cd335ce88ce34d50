//! CSV fixtures shared by integration tests

/// Ages 25, 21, 50
pub const PEOPLE_A: &str = "fname,lname,age\n\"Rob\",\"Pike\",25\nKen,Thompson,21\n\"Robert\",\"Griesemer\",50\n";

/// Ages 15, 31, 57
pub const PEOPLE_B: &str = "fname,lname,age\n\"Rob\",\"Pike\",15\nKen,Thompson,31\n\"Robert\",\"Griesemer\",57\n";

/// Ages 4, 30, 50 with the columns in a different order
pub const PEOPLE_C_REORDERED: &str = "age,lname,fname\n4,\"Kick\",\"Bob\"\n30,Thompson,Henry\n50,\"Brady\",\"Robert\"\n";

/// A negative age makes the whole source invalid
pub const NEGATIVE_AGE: &str = "fname,lname,age\n\"Koko\",\"Pike\",-25\nKenny,Thompson,33\n";

/// An unknown column makes the whole source invalid
pub const UNKNOWN_COLUMN: &str = "fname,lname,years\nAda,Lovelace,36\n";

/// A record with a missing field makes the whole source invalid
pub const SHORT_RECORD: &str = "fname,lname,age\nAda,Lovelace\n";
