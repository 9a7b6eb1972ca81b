mod point_tests;
mod latlon_tests;
mod dispatch_tests;
