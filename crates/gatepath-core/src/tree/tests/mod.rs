mod resolver_tests;
mod solve_tests;
