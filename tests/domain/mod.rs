mod vehicle_test;
