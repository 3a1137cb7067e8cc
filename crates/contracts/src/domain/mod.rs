pub mod a001_routing_rule;
